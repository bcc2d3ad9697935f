//! Common utility functions shared by the calculation and formatting modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly the midpoint are rounded away from zero, so 0.005 becomes 0.01.
///
/// # Arguments
///
/// * `value` - The decimal value to round
/// * `dp` - The number of decimal places to keep
///
/// # Returns
///
/// The value rounded to `dp` decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reajuste_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454), 2), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(0.005), 2), dec!(0.01));
/// assert_eq!(round_half_up(dec!(20.05), 1), dec!(20.1));
/// assert_eq!(round_half_up(dec!(-123.455), 2), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
