//! End-to-end tests for the validate, compute, format call chain.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use reajuste_core::{
    CurrencyLocale, RawFormInput, ValidationError, compute_adjustment, compute_indicator_width,
    format_currency, format_percent, increase_factor, validate_submission,
};

fn submission(
    name: &str,
    value_text: &str,
    percent_text: &str,
) -> RawFormInput {
    RawFormInput {
        name: name.to_string(),
        value_text: value_text.to_string(),
        percent_text: percent_text.to_string(),
    }
}

#[test]
fn full_flow_from_typed_digits_to_rendered_breakdown() {
    let locale = CurrencyLocale::pt_br();
    let input = submission("Camisa Polo", "10050", "20");

    let validated = validate_submission(&input).unwrap();
    assert_eq!(validated.original_value, dec!(100.50));
    assert_eq!(validated.percent_rate, dec!(20));

    let result = compute_adjustment(&validated);
    assert_eq!(result.updated_value, dec!(120.60));
    assert_eq!(result.increase_amount(), dec!(20.10));

    assert_eq!(format_currency(result.original_value, &locale), "R$ 100,50");
    assert_eq!(format_currency(result.increase_amount(), &locale), "R$ 20,10");
    assert_eq!(format_currency(result.updated_value, &locale), "R$ 120,60");

    let factor = increase_factor(result.original_value, result.updated_value);
    assert_eq!(format_percent(factor), "+20.0%");
    assert_eq!(
        compute_indicator_width(result.original_value, result.updated_value),
        dec!(60)
    );
}

#[test]
fn full_flow_with_us_locale_changes_rendering_only() {
    let input = submission("Camisa Polo", "123456", "10");

    let validated = validate_submission(&input).unwrap();
    let result = compute_adjustment(&validated);

    assert_eq!(result.updated_value, dec!(1358.016));
    assert_eq!(
        format_currency(result.updated_value, &CurrencyLocale::en_us()),
        "$1,358.02"
    );
    assert_eq!(
        format_currency(result.updated_value, &CurrencyLocale::pt_br()),
        "R$ 1.358,02"
    );
}

#[test]
fn zero_priced_item_flows_through_without_faulting() {
    let locale = CurrencyLocale::pt_br();
    let input = submission("Brinde", "0", "50");

    let validated = validate_submission(&input).unwrap();
    let result = compute_adjustment(&validated);

    assert_eq!(result.updated_value, dec!(0));
    assert_eq!(format_currency(result.updated_value, &locale), "R$ 0,00");
    assert_eq!(
        compute_indicator_width(result.original_value, result.updated_value),
        dec!(0)
    );
}

#[test]
fn validation_failure_stops_the_flow_before_computation() {
    let result = validate_submission(&submission("", "10050", "20"));

    assert_eq!(result, Err(ValidationError::EmptyName));
}
