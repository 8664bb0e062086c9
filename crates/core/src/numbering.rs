//! Human-readable document numbers (`PREFIX-YYMM-RRR`).
//!
//! Numbers are informal draft identifiers: the serial is random, so two
//! documents minted in the same month can collide. The editing surface lets the
//! user overwrite the number with any text, which is why [`DocumentNumber`]
//! accepts arbitrary strings.

use core::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Exclusive upper bound of the random serial.
const SERIAL_RANGE: u16 = 1000;

/// The kinds of document the generator produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Proposal,
    Contract,
    Audit,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Invoice,
        DocumentKind::Proposal,
        DocumentKind::Contract,
        DocumentKind::Audit,
    ];

    /// Prefix used when no override is configured.
    pub fn default_prefix(self) -> &'static str {
        match self {
            DocumentKind::Invoice => "WMN",
            DocumentKind::Proposal => "PROP",
            DocumentKind::Contract => "CONT",
            DocumentKind::Audit => "AUD",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Proposal => "proposal",
            DocumentKind::Contract => "contract",
            DocumentKind::Audit => "audit",
        }
    }
}

impl core::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown document kind: {s:?}")))
    }
}

/// A document's display number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentNumber(String);

impl ValueObject for DocumentNumber {}

impl DocumentNumber {
    /// Build `{prefix}-{YY}{MM}-{serial}` from an explicit date and serial.
    ///
    /// The serial is reduced into `0..=999` and zero-padded to three digits.
    pub fn compose<D: Datelike>(prefix: &str, date: &D, serial: u16) -> Self {
        Self(format!(
            "{prefix}-{:02}{:02}-{:03}",
            date.year().rem_euclid(100),
            date.month(),
            serial % SERIAL_RANGE
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DocumentNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Random serial in `0..=999`, drawn from a v4 UUID's random bits.
fn random_serial() -> u16 {
    (Uuid::new_v4().as_u128() % u128::from(SERIAL_RANGE)) as u16
}

/// Mint a number for `prefix` using the current local year/month and a random
/// serial. Not guaranteed unique.
pub fn generate_document_number(prefix: &str) -> DocumentNumber {
    let today = Local::now().date_naive();
    let number = DocumentNumber::compose(prefix, &today, random_serial());
    tracing::debug!(%number, "generated document number");
    number
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn compose_pads_month_and_serial() {
        let n = DocumentNumber::compose("WMN", &date(2025, 3, 5), 7);
        assert_eq!(n.as_str(), "WMN-2503-007");
    }

    #[test]
    fn compose_keeps_serial_in_range() {
        let n = DocumentNumber::compose("AUD", &date(2030, 12, 31), 1999);
        assert_eq!(n.as_str(), "AUD-3012-999");
        let n = DocumentNumber::compose("AUD", &date(2030, 12, 31), 1000);
        assert_eq!(n.as_str(), "AUD-3012-000");
    }

    #[test]
    fn generated_number_has_expected_shape() {
        for _ in 0..50 {
            let n = generate_document_number("PROP");
            let parts: Vec<&str> = n.as_str().split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "PROP");
            assert_eq!(parts[1].len(), 4);
            assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(parts[2].len(), 3);
            assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn generated_number_uses_current_year_and_month() {
        let today = Local::now().date_naive();
        let expected = format!("WMN-{:02}{:02}-", today.year() % 100, today.month());
        // Month rollover between the two clock reads is the only way this can fail.
        assert!(generate_document_number("WMN").as_str().starts_with(&expected));
    }

    #[test]
    fn random_serial_stays_below_one_thousand() {
        for _ in 0..1000 {
            assert!(random_serial() < 1000);
        }
    }

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("Invoice".parse::<DocumentKind>(), Ok(DocumentKind::Invoice));
        assert_eq!(" audit ".parse::<DocumentKind>(), Ok(DocumentKind::Audit));
        assert!("receipt".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn default_prefixes() {
        assert_eq!(DocumentKind::Invoice.default_prefix(), "WMN");
        assert_eq!(DocumentKind::Proposal.default_prefix(), "PROP");
        assert_eq!(DocumentKind::Contract.default_prefix(), "CONT");
        assert_eq!(DocumentKind::Audit.default_prefix(), "AUD");
    }
}
