//! Interactive entry form and the one-shot submission path.
//!
//! The form mirrors the two-step flow of the mobile app: fill the three
//! fields, submit, read the result card, then either adjust the same values,
//! start a new simulation, or quit. All scanning, validation, computation,
//! and formatting is delegated to the core.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use tracing::debug;

use reajuste_core::{
    CurrencyLocale, RawFormInput, compute_adjustment, digits_to_decimal, format_currency,
    parse_monetary_input, parse_percent_input, validate_submission,
};

use crate::render;

/// Validates and computes a single submission, printing the result card.
///
/// # Errors
///
/// Fails with the form's alert message when the submission does not
/// validate.
pub fn run_once(
    input: &RawFormInput,
    locale: &CurrencyLocale,
) -> Result<()> {
    debug!("one-shot submission:\n{input}");

    let validated = match validate_submission(input) {
        Ok(validated) => validated,
        Err(e) => bail!("{}", render::alert_message(&e)),
    };

    let result = compute_adjustment(&validated);
    println!("{}", render::result_card(&result, locale));
    Ok(())
}

/// Runs the interactive form loop until the user quits.
pub fn run_interactive(
    mut current: RawFormInput,
    locale: &CurrencyLocale,
) -> Result<()> {
    println!("Calcule & Reajuste seus produtos");
    println!("Mantenha os preços atualizados conforme as mudanças do mercado.\n");

    loop {
        current = fill_form(&current, locale)?;

        let validated = match validate_submission(&current) {
            Ok(validated) => validated,
            Err(e) => {
                println!("\nAtenção: {}\n", render::alert_message(&e));
                continue;
            }
        };

        let result = compute_adjustment(&validated);
        println!("\n{}\n", render::result_card(&result, locale));

        match read_line("[a] Ajustar valores  [n] Nova simulação  [q] Sair: ")?
            .trim()
            .to_lowercase()
            .as_str()
        {
            // Back to the form with the same values pre-filled.
            "a" => println!(),
            "n" => {
                current = RawFormInput::default();
                println!();
            }
            _ => return Ok(()),
        }
    }
}

/// Prompts for the three fields, returning the collected raw input.
///
/// Numeric fields are scanned as they are entered; stray characters produce
/// the same inline warning the form shows, and the surviving digits are
/// kept. Pressing enter on a pre-filled field keeps its value.
fn fill_form(
    initial: &RawFormInput,
    locale: &CurrencyLocale,
) -> Result<RawFormInput> {
    let name = prompt_field("Nome do Produto", &initial.name)?;

    let value_text = prompt_field("Valor Original (centavos, somente dígitos)", &initial.value_text)?;
    let scan = parse_monetary_input(&value_text);
    if scan.had_invalid_chars {
        println!("  Digite apenas números para o valor.");
    }
    if let Some(value) = digits_to_decimal(&scan.digits) {
        println!("  → {}", format_currency(value, locale));
    }

    let percent_text = prompt_field("Percentual de Aumento (somente dígitos)", &initial.percent_text)?;
    let percent_scan = parse_percent_input(&percent_text);
    if percent_scan.had_invalid_chars {
        println!("  Digite apenas números para a porcentagem.");
    }

    Ok(RawFormInput {
        name,
        value_text: scan.digits,
        percent_text: percent_scan.digits,
    })
}

/// Prompts for one field; enter keeps the pre-filled value when present.
fn prompt_field(
    label: &str,
    current: &str,
) -> Result<String> {
    let prompt = if current.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{current}]: ")
    };

    let line = read_line(&prompt)?;
    if line.is_empty() && !current.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(line)
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("entrada encerrada");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
