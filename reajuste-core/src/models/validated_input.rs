use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A submission that passed every field check.
///
/// Produced by [`validate_submission`](crate::calculations::input::validate_submission)
/// and consumed immediately by the computation step; it is never retained
/// between submissions.
///
/// Invariants upheld by construction:
/// - `name` is non-empty after trimming whitespace
/// - `original_value >= 0`
/// - `percent_rate >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    /// Trimmed product name.
    pub name: String,

    /// Original price in currency units.
    pub original_value: Decimal,

    /// Increase to apply, as a whole percentage (20 means 20%).
    pub percent_rate: Decimal,
}
