//! Price readjustment computation.
//!
//! The computation is a pure function over an already-validated submission,
//! so it has no failure path. Values are carried at full precision; rounding
//! happens only when a value is formatted for display.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reajuste_core::ValidatedInput;
//! use reajuste_core::calculations::adjustment::compute_adjustment;
//!
//! let input = ValidatedInput {
//!     name: "Camisa Polo".to_string(),
//!     original_value: dec!(100.50),
//!     percent_rate: dec!(20),
//! };
//!
//! let result = compute_adjustment(&input);
//!
//! assert_eq!(result.updated_value, dec!(120.60));
//! assert_eq!(result.increase_amount(), dec!(20.10));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AdjustmentResult, ValidatedInput};

/// Applies the percent increase to the original value.
///
/// Deterministic and total over validated input, including an original value
/// of zero (the updated value is zero) and a percent of zero (the updated
/// value equals the original). No rounding is applied here.
pub fn compute_adjustment(input: &ValidatedInput) -> AdjustmentResult {
    let increase = input.original_value * input.percent_rate / Decimal::ONE_HUNDRED;
    let updated_value = input.original_value + increase;

    debug!(
        original = %input.original_value,
        percent = %input.percent_rate,
        updated = %updated_value,
        "computed adjustment",
    );

    AdjustmentResult {
        item_name: input.name.clone(),
        original_value: input.original_value,
        updated_value,
        percent_used: input.percent_rate,
    }
}

/// Relative increase between two prices, as a percentage.
///
/// Returns zero when the original value is zero, since the relative increase
/// is undefined there.
pub fn increase_factor(
    original_value: Decimal,
    updated_value: Decimal,
) -> Decimal {
    if original_value.is_zero() {
        return Decimal::ZERO;
    }
    (updated_value / original_value - Decimal::ONE) * Decimal::ONE_HUNDRED
}

/// Width of the impact indicator bar, as a percentage in `[0, 100]`.
///
/// The relative increase is scaled by three and clamped, so a 20% increase
/// fills 60% of the bar and anything from 33.4% up fills it completely.
/// An original value of zero yields an empty bar.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reajuste_core::calculations::adjustment::compute_indicator_width;
///
/// assert_eq!(compute_indicator_width(dec!(200), dec!(240)), dec!(60));
/// assert_eq!(compute_indicator_width(dec!(100), dec!(200)), dec!(100));
/// assert_eq!(compute_indicator_width(dec!(0), dec!(0)), dec!(0));
/// ```
pub fn compute_indicator_width(
    original_value: Decimal,
    updated_value: Decimal,
) -> Decimal {
    let scaled = increase_factor(original_value, updated_value) * Decimal::from(3);
    scaled.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
