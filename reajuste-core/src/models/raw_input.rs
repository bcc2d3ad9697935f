use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the raw strings collected by the entry form.
///
/// Nothing here is validated. The value and percent fields hold the digit
/// sequence accumulated from keystrokes, so they may be empty or contain
/// stray characters at any point while the user is typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFormInput {
    pub name: String,
    pub value_text: String,
    pub percent_text: String,
}

impl fmt::Display for RawFormInput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Name:    {}", self.name)?;
        writeln!(f, "Value:   {}", self.value_text)?;
        write!(f, "Percent: {}", self.percent_text)
    }
}
