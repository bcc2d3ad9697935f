use serde::{Deserialize, Serialize};

/// Currency display conventions.
///
/// Only formatting is affected. The arithmetic itself is currency-agnostic,
/// so swapping the locale never changes a computed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyLocale {
    /// Currency symbol as rendered, including any spacing (`"R$ "`, `"$"`).
    pub symbol: String,

    /// Separator between the integer and fractional part.
    pub decimal_separator: char,

    /// Separator between groups of three integer digits.
    pub group_separator: char,
}

impl CurrencyLocale {
    /// Brazilian Portuguese conventions: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$ ".to_string(),
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    /// US English conventions: `$1,234.56`.
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}
