pub mod calculations;
pub mod models;

pub use calculations::adjustment::{compute_adjustment, compute_indicator_width, increase_factor};
pub use calculations::format::{format_currency, format_percent, parse_currency};
pub use calculations::input::{
    DigitScan, Field, ValidationError, digits_to_decimal, digits_to_percent, parse_monetary_input,
    parse_percent_input, validate_submission,
};
pub use models::*;
