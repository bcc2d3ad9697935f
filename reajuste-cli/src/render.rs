//! Terminal rendering of the readjustment breakdown.
//!
//! Every number printed here comes from the core's compute and format
//! functions; this module only lays the values out.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use reajuste_core::calculations::common::round_half_up;
use reajuste_core::{
    AdjustmentResult, CurrencyLocale, ValidationError, compute_indicator_width, format_currency,
    format_percent, increase_factor,
};

/// Inner width of the impact bar, in characters.
const BAR_WIDTH: usize = 30;

/// Card width, matching the widest rule line.
const CARD_WIDTH: usize = 42;

/// Alert text shown when a submission is rejected, one message per field,
/// matching the wording of the entry form.
pub fn alert_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::EmptyName => "Preencha o nome do produto!",
        ValidationError::InvalidNumber(field) => match field {
            reajuste_core::Field::Value => "O valor original deve ser um número!",
            reajuste_core::Field::Percent => "A porcentagem deve ser um número!",
        },
    }
}

/// Draws the impact bar for an indicator width percentage in `[0, 100]`.
fn impact_bar(width_pct: Decimal) -> String {
    let filled = round_half_up(width_pct * Decimal::from(BAR_WIDTH as u32) / Decimal::ONE_HUNDRED, 0)
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn row(
    label: &str,
    value: &str,
) -> String {
    format!("  {label:<22}{value}")
}

/// Renders the result card: original value, percent applied, increase
/// amount, impact bar, and the new value.
pub fn result_card(
    result: &AdjustmentResult,
    locale: &CurrencyLocale,
) -> String {
    let factor = increase_factor(result.original_value, result.updated_value);
    let width = compute_indicator_width(result.original_value, result.updated_value);
    let rule = "─".repeat(CARD_WIDTH);

    let mut lines = Vec::new();
    lines.push("Resultado".to_string());
    lines.push(rule.clone());
    lines.push(format!("  {}", result.item_name));
    lines.push(rule.clone());
    lines.push(row(
        "Valor Original:",
        &format_currency(result.original_value, locale),
    ));
    lines.push(row(
        "Percentual Aplicado:",
        &format!("{}%", result.percent_used),
    ));
    lines.push(row(
        "Valor do Aumento:",
        &format_currency(result.increase_amount(), locale),
    ));
    lines.push(rule.clone());
    lines.push("  Impacto do Aumento".to_string());
    lines.push(format!("  {} {}", impact_bar(width), format_percent(factor)));
    lines.push(rule);
    lines.push(row(
        "Novo Valor:",
        &format_currency(result.updated_value, locale),
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use reajuste_core::Field;

    use super::*;

    fn sample_result() -> AdjustmentResult {
        AdjustmentResult {
            item_name: "Camisa Polo".to_string(),
            original_value: dec!(100.50),
            updated_value: dec!(120.60),
            percent_used: dec!(20),
        }
    }

    #[test]
    fn alert_messages_cover_every_field() {
        assert_eq!(
            alert_message(&ValidationError::EmptyName),
            "Preencha o nome do produto!"
        );
        assert_eq!(
            alert_message(&ValidationError::InvalidNumber(Field::Value)),
            "O valor original deve ser um número!"
        );
        assert_eq!(
            alert_message(&ValidationError::InvalidNumber(Field::Percent)),
            "A porcentagem deve ser um número!"
        );
    }

    #[test]
    fn impact_bar_fills_proportionally() {
        // 60% of a 30-char bar is 18 filled cells.
        let bar = impact_bar(dec!(60));

        assert_eq!(bar.matches('█').count(), 18);
        assert_eq!(bar.matches('░').count(), 12);
    }

    #[test]
    fn impact_bar_is_empty_at_zero() {
        let bar = impact_bar(dec!(0));

        assert_eq!(bar.matches('█').count(), 0);
        assert_eq!(bar.matches('░').count(), BAR_WIDTH);
    }

    #[test]
    fn impact_bar_is_full_at_one_hundred() {
        let bar = impact_bar(dec!(100));

        assert_eq!(bar.matches('█').count(), BAR_WIDTH);
    }

    #[test]
    fn result_card_shows_every_breakdown_row() {
        let card = result_card(&sample_result(), &CurrencyLocale::pt_br());

        assert!(card.contains("Camisa Polo"));
        assert!(card.contains("Valor Original:"));
        assert!(card.contains("R$ 100,50"));
        assert!(card.contains("Percentual Aplicado:"));
        assert!(card.contains("20%"));
        assert!(card.contains("Valor do Aumento:"));
        assert!(card.contains("R$ 20,10"));
        assert!(card.contains("Impacto do Aumento"));
        assert!(card.contains("+20.0%"));
        assert!(card.contains("Novo Valor:"));
        assert!(card.contains("R$ 120,60"));
    }

    #[test]
    fn result_card_respects_the_locale() {
        let card = result_card(&sample_result(), &CurrencyLocale::en_us());

        assert!(card.contains("$100.50"));
        assert!(card.contains("$120.60"));
        assert!(!card.contains("R$"));
    }
}
