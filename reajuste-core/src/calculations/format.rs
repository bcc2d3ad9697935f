//! Display formatting for monetary and percentage values.
//!
//! Rounding happens here and nowhere earlier: currency renders with exactly
//! two fractional digits and percentages with exactly one, both under the
//! half-up rule from [`common::round_half_up`]. The midpoint case is
//! deterministic, so formatting 0.005 always yields 0.01.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::CurrencyLocale;

/// Inserts the locale's group separator every three integer digits.
fn group_digits(
    int_part: &str,
    separator: char,
) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Renders a decimal as currency text under the given locale.
///
/// The value is rounded half-up to two fractional digits, the integer part
/// is grouped in threes, and the locale's symbol is prefixed. A negative
/// sign, while impossible for values produced by the adjustment flow, is
/// rendered ahead of the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reajuste_core::CurrencyLocale;
/// use reajuste_core::calculations::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.56), &CurrencyLocale::pt_br()), "R$ 1.234,56");
/// assert_eq!(format_currency(dec!(1234.56), &CurrencyLocale::en_us()), "$1,234.56");
/// assert_eq!(format_currency(dec!(0.005), &CurrencyLocale::pt_br()), "R$ 0,01");
/// ```
pub fn format_currency(
    value: Decimal,
    locale: &CurrencyLocale,
) -> String {
    let mut rounded = round_half_up(value, 2);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}{}{}",
        if negative { "-" } else { "" },
        locale.symbol,
        group_digits(int_part, locale.group_separator),
        locale.decimal_separator,
        frac_part,
    )
}

/// Renders a percentage with one fractional digit and an explicit sign.
///
/// Used for displaying an increase, so non-negative values carry a leading
/// `+` (`+20.0%`). Rounded half-up to one fractional digit.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = round_half_up(value, 1);
    rounded.rescale(1);

    if rounded.is_sign_negative() {
        format!("{rounded}%")
    } else {
        format!("+{rounded}%")
    }
}

/// Parses currency text rendered by [`format_currency`] back into a decimal.
///
/// Strips the locale's symbol and group separators and normalizes the
/// decimal separator. Returns `None` when the remainder is not a number,
/// logging the rejected input.
pub fn parse_currency(
    text: &str,
    locale: &CurrencyLocale,
) -> Option<Decimal> {
    let normalized = text
        .replace(&locale.symbol, "")
        .replace(locale.group_separator, "")
        .replace(locale.decimal_separator, ".")
        .trim()
        .to_string();

    match normalized.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(input = %text, "unparseable currency text: {e}");
            None
        }
    }
}
