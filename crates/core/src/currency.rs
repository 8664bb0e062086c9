//! Closed set of currencies a document can be priced in.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Currency of a document.
///
/// Each currency is tied to exactly one display locale; there is no conversion
/// between them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Kes,
    Usd,
    Eur,
    Gbp,
}

impl ValueObject for Currency {}

impl Currency {
    /// Every supported currency, in the order the editing surface lists them.
    pub const ALL: [Currency; 4] = [Currency::Kes, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Kes => "KES",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// BCP 47 tag of the locale amounts in this currency are rendered with.
    pub fn locale(self) -> &'static str {
        match self {
            Currency::Kes => "en-KE",
            Currency::Usd => "en-US",
            Currency::Eur => "de-DE",
            Currency::Gbp => "en-GB",
        }
    }

    /// Human-readable label for pickers, e.g. `USD - US Dollar`.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Kes => "KES - Kenyan Shilling",
            Currency::Usd => "USD - US Dollar",
            Currency::Eur => "EUR - Euro",
            Currency::Gbp => "GBP - British Pound",
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Lenient lookup: unknown codes resolve to the default currency (KES).
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            DomainError::validation(format!("unsupported currency code: {s:?}"))
        })
    }
}
