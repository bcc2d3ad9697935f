//! Input scanning, parsing, and submission validation for the entry form.
//!
//! The form collects three fields: product name, original value, and percent
//! increase. The two numeric fields accept keystrokes that are scanned down
//! to their digit subsequence and then interpreted under different rules:
//!
//! | Field   | Interpretation |
//! |---------|----------------|
//! | value   | digits are centavos; typing "1","2","3" yields 0.01, 0.12, 1.23 |
//! | percent | digits are a whole percentage; typing "2","0" yields 20 |
//!
//! The cents-shift entry model for the value field is a point-of-sale idiom:
//! each digit keystroke shifts the implied decimal point one place left. It
//! must not be replaced with direct decimal parsing, since "123" means 1.23,
//! never 123.
//!
//! Submission validation stops at the first failing field, in the order
//! name, value, percent, so a single error is reported per attempt.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reajuste_core::RawFormInput;
//! use reajuste_core::calculations::input::validate_submission;
//!
//! let input = RawFormInput {
//!     name: "Camisa Polo".to_string(),
//!     value_text: "10050".to_string(),
//!     percent_text: "20".to_string(),
//! };
//!
//! let validated = validate_submission(&input).unwrap();
//!
//! assert_eq!(validated.original_value, dec!(100.50));
//! assert_eq!(validated.percent_rate, dec!(20));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{RawFormInput, ValidatedInput};

/// Numeric form field, used to report which field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// The original value field.
    Value,
    /// The percent increase field.
    Percent,
}

impl std::fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Field::Value => write!(f, "value"),
            Field::Percent => write!(f, "percent"),
        }
    }
}

/// Errors that can occur when a form submission is validated.
///
/// Both variants are recoverable user-input errors. The caller surfaces them
/// and does not proceed to computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The product name is empty after trimming whitespace.
    #[error("product name is empty")]
    EmptyName,

    /// A numeric field is empty or does not scan to a parseable number.
    #[error("field '{0}' is empty or not a valid number")]
    InvalidNumber(Field),
}

/// Outcome of scanning raw typed text down to its digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitScan {
    /// The digit subsequence of the input, in original order.
    pub digits: String,

    /// `true` when at least one non-digit character was stripped.
    pub had_invalid_chars: bool,
}

fn scan_digits(raw: &str) -> DigitScan {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let had_invalid_chars = digits.len() != raw.len();
    DigitScan {
        digits,
        had_invalid_chars,
    }
}

/// Scans raw text typed into the original value field.
///
/// Strips every character that is not an ASCII digit and reports whether
/// anything was stripped. Total over all inputs; an empty digit string is a
/// valid outcome. The digits are later interpreted as centavos by
/// [`digits_to_decimal`].
///
/// # Examples
///
/// ```
/// use reajuste_core::calculations::input::parse_monetary_input;
///
/// let scan = parse_monetary_input("R$ 1,23");
/// assert_eq!(scan.digits, "123");
/// assert!(scan.had_invalid_chars);
///
/// let scan = parse_monetary_input("10050");
/// assert!(!scan.had_invalid_chars);
/// ```
pub fn parse_monetary_input(raw: &str) -> DigitScan {
    scan_digits(raw)
}

/// Scans raw text typed into the percent field.
///
/// Same stripping rule as [`parse_monetary_input`]; the digits are later
/// interpreted as a whole percentage by [`digits_to_percent`], with no
/// cents shift.
pub fn parse_percent_input(raw: &str) -> DigitScan {
    scan_digits(raw)
}

/// Interprets a digit string as an integer count of centavos.
///
/// Returns `None` for the empty string, so an untouched field stays
/// distinguishable from an explicit zero amount ("00" is `Some(0.00)`).
/// Digit strings beyond the `i64` centavo range also return `None` and are
/// rejected at submission as not a valid number.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use reajuste_core::calculations::input::digits_to_decimal;
///
/// assert_eq!(digits_to_decimal("10050"), Some(dec!(100.50)));
/// assert_eq!(digits_to_decimal("1"), Some(dec!(0.01)));
/// assert_eq!(digits_to_decimal(""), None);
/// ```
pub fn digits_to_decimal(digits: &str) -> Option<Decimal> {
    if digits.is_empty() {
        return None;
    }
    let cents: i64 = digits.parse().ok()?;
    Some(Decimal::new(cents, 2))
}

/// Interprets a digit string as a whole percentage.
///
/// Returns `None` for the empty string or for digit strings beyond the
/// `i64` range. "20" yields 20, not 0.20.
pub fn digits_to_percent(digits: &str) -> Option<Decimal> {
    if digits.is_empty() {
        return None;
    }
    let percent: i64 = digits.parse().ok()?;
    Some(Decimal::from(percent))
}

/// Validates a form submission, stopping at the first failing field.
///
/// Fields are checked in the order name, value, percent. The numeric fields
/// are scanned before interpretation, so raw text with stray characters is
/// accepted as long as it contains digits.
///
/// # Errors
///
/// Returns [`ValidationError`] when:
/// - the trimmed name is empty
/// - the value or percent field scans to nothing parseable
pub fn validate_submission(input: &RawFormInput) -> Result<ValidatedInput, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        debug!("submission rejected: empty product name");
        return Err(ValidationError::EmptyName);
    }

    let scan = parse_monetary_input(&input.value_text);
    let original_value = digits_to_decimal(&scan.digits).ok_or_else(|| {
        debug!(value_text = %input.value_text, "submission rejected: unparseable value");
        ValidationError::InvalidNumber(Field::Value)
    })?;

    let scan = parse_percent_input(&input.percent_text);
    let percent_rate = digits_to_percent(&scan.digits).ok_or_else(|| {
        debug!(percent_text = %input.percent_text, "submission rejected: unparseable percent");
        ValidationError::InvalidNumber(Field::Percent)
    })?;

    Ok(ValidatedInput {
        name: name.to_string(),
        original_value,
        percent_rate,
    })
}
