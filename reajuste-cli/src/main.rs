use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use reajuste_cli::form;
use reajuste_core::{CurrencyLocale, RawFormInput};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Price readjustment calculator.
///
/// Computes a product's new price from its original value and a percent
/// increase, and prints the formatted breakdown. With all three inputs
/// given as flags it runs once and exits; otherwise it opens the
/// interactive form, pre-filled with whatever was provided.
#[derive(Debug, Parser)]
struct Cli {
    /// Product name.
    #[arg(long)]
    name: Option<String>,

    /// Original value as typed digits, interpreted as centavos
    /// (`10050` means 100.50).
    #[arg(long)]
    value: Option<String>,

    /// Percent increase as typed digits (`20` means 20%).
    #[arg(long)]
    percent: Option<String>,

    /// Currency display conventions.
    #[arg(long, value_enum, default_value = "pt-br")]
    locale: LocaleArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    PtBr,
    EnUs,
}

impl LocaleArg {
    fn to_locale(self) -> CurrencyLocale {
        match self {
            LocaleArg::PtBr => CurrencyLocale::pt_br(),
            LocaleArg::EnUs => CurrencyLocale::en_us(),
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let locale = cli.locale.to_locale();

    match (cli.name, cli.value, cli.percent) {
        (Some(name), Some(value_text), Some(percent_text)) => {
            let input = RawFormInput {
                name,
                value_text,
                percent_text,
            };
            form::run_once(&input, &locale)
        }
        (name, value, percent) => {
            let initial = RawFormInput {
                name: name.unwrap_or_default(),
                value_text: value.unwrap_or_default(),
                percent_text: percent.unwrap_or_default(),
            };
            form::run_interactive(initial, &locale)
        }
    }
}
