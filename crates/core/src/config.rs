//! Defaults applied when a new, empty document is created.
//!
//! Values come from the process environment (`DOCGEN_*`). Anything missing
//! keeps its built-in default; anything malformed is logged and ignored.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{DomainError, DomainResult};
use crate::numbering::{DocumentKind, DocumentNumber, generate_document_number};

pub const ENV_INVOICE_PREFIX: &str = "DOCGEN_INVOICE_PREFIX";
pub const ENV_PROPOSAL_PREFIX: &str = "DOCGEN_PROPOSAL_PREFIX";
pub const ENV_CONTRACT_PREFIX: &str = "DOCGEN_CONTRACT_PREFIX";
pub const ENV_AUDIT_PREFIX: &str = "DOCGEN_AUDIT_PREFIX";
pub const ENV_DEFAULT_CURRENCY: &str = "DOCGEN_DEFAULT_CURRENCY";
pub const ENV_INVOICE_DUE_DAYS: &str = "DOCGEN_INVOICE_DUE_DAYS";
pub const ENV_PROPOSAL_VALID_DAYS: &str = "DOCGEN_PROPOSAL_VALID_DAYS";
pub const ENV_INVOICE_NOTES: &str = "DOCGEN_INVOICE_NOTES";

const DEFAULT_INVOICE_DUE_DAYS: u32 = 14;
const DEFAULT_PROPOSAL_VALID_DAYS: u32 = 30;
const DEFAULT_INVOICE_NOTES: &str = "PAYMENT INFORMATION:";

/// Document creation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefaults {
    pub invoice_prefix: String,
    pub proposal_prefix: String,
    pub contract_prefix: String,
    pub audit_prefix: String,
    pub default_currency: Currency,
    /// Days between an invoice's issue date and its due date.
    pub invoice_due_days: u32,
    /// Days a proposal stays valid after issue.
    pub proposal_valid_days: u32,
    /// Notes pre-filled on new invoices (payment instructions).
    pub invoice_notes: String,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            invoice_prefix: DocumentKind::Invoice.default_prefix().to_string(),
            proposal_prefix: DocumentKind::Proposal.default_prefix().to_string(),
            contract_prefix: DocumentKind::Contract.default_prefix().to_string(),
            audit_prefix: DocumentKind::Audit.default_prefix().to_string(),
            default_currency: Currency::default(),
            invoice_due_days: DEFAULT_INVOICE_DUE_DAYS,
            proposal_valid_days: DEFAULT_PROPOSAL_VALID_DAYS,
            invoice_notes: DEFAULT_INVOICE_NOTES.to_string(),
        }
    }
}

impl DocumentDefaults {
    /// Load defaults from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaults = Self::default();

        let prefixes = [
            (ENV_INVOICE_PREFIX, &mut defaults.invoice_prefix),
            (ENV_PROPOSAL_PREFIX, &mut defaults.proposal_prefix),
            (ENV_CONTRACT_PREFIX, &mut defaults.contract_prefix),
            (ENV_AUDIT_PREFIX, &mut defaults.audit_prefix),
        ];
        for (key, slot) in prefixes {
            if let Some(raw) = lookup(key) {
                match parse_prefix(&raw) {
                    Ok(prefix) => *slot = prefix,
                    Err(err) => tracing::warn!(key, %err, "ignoring invalid prefix"),
                }
            }
        }

        if let Some(raw) = lookup(ENV_DEFAULT_CURRENCY) {
            match raw.trim().parse::<Currency>() {
                Ok(currency) => defaults.default_currency = currency,
                Err(err) => tracing::warn!(key = ENV_DEFAULT_CURRENCY, %err, "ignoring invalid currency"),
            }
        }

        let day_counts = [
            (ENV_INVOICE_DUE_DAYS, &mut defaults.invoice_due_days),
            (ENV_PROPOSAL_VALID_DAYS, &mut defaults.proposal_valid_days),
        ];
        for (key, slot) in day_counts {
            if let Some(raw) = lookup(key) {
                match parse_days(&raw) {
                    Ok(days) => *slot = days,
                    Err(err) => tracing::warn!(key, %err, "ignoring invalid day count"),
                }
            }
        }

        if let Some(notes) = lookup(ENV_INVOICE_NOTES) {
            defaults.invoice_notes = notes;
        }

        tracing::debug!(?defaults, "document defaults loaded");
        defaults
    }

    /// Prefix configured for `kind`.
    pub fn prefix(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Invoice => &self.invoice_prefix,
            DocumentKind::Proposal => &self.proposal_prefix,
            DocumentKind::Contract => &self.contract_prefix,
            DocumentKind::Audit => &self.audit_prefix,
        }
    }

    /// Mint a fresh number for `kind` with the configured prefix.
    pub fn next_number(&self, kind: DocumentKind) -> DocumentNumber {
        generate_document_number(self.prefix(kind))
    }
}

fn parse_prefix(raw: &str) -> DomainResult<String> {
    let prefix = raw.trim();
    if prefix.is_empty() {
        return Err(DomainError::validation("prefix must not be empty"));
    }
    if prefix.contains(char::is_whitespace) || prefix.contains('-') {
        return Err(DomainError::validation(format!(
            "prefix must not contain whitespace or '-': {prefix:?}"
        )));
    }
    Ok(prefix.to_string())
}

fn parse_days(raw: &str) -> DomainResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| DomainError::validation(format!("expected a day count, got {raw:?}: {e}")))
}
