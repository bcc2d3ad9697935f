use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a price readjustment.
///
/// Invariant: `updated_value = original_value * (1 + percent_used / 100)`,
/// carried at full precision. Rounding is a display concern and happens only
/// in the formatting functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// Product name, as validated.
    pub item_name: String,

    /// Price before the increase.
    pub original_value: Decimal,

    /// Price after the increase.
    pub updated_value: Decimal,

    /// Percentage that was applied.
    pub percent_used: Decimal,
}

impl AdjustmentResult {
    /// Absolute difference between the updated and original price.
    pub fn increase_amount(&self) -> Decimal {
        self.updated_value - self.original_value
    }
}
