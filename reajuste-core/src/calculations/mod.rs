//! Calculation logic for the price readjustment flow.
//!
//! The flow is a pure, synchronous call chain with no shared state:
//! scan the typed text, validate the submission, compute the adjustment,
//! format the results for display.

pub mod adjustment;
pub mod common;
pub mod format;
pub mod input;

pub use adjustment::{compute_adjustment, compute_indicator_width, increase_factor};
pub use format::{format_currency, format_percent, parse_currency};
pub use input::{
    DigitScan, Field, ValidationError, digits_to_decimal, digits_to_percent, parse_monetary_input,
    parse_percent_input, validate_submission,
};
