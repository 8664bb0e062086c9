//! Saved invoice snapshots and their status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docgen_core::{DomainError, DomainResult, InvoiceId};

use crate::invoice::InvoiceDraft;

/// Invoice status lifecycle: `draft → sent → paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

/// An invoice frozen together with the total it had when it was saved.
///
/// This is a value for the caller to store; nothing here persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedInvoice {
    pub id: InvoiceId,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub total: f64,
    #[serde(flatten)]
    pub invoice: InvoiceDraft,
}

impl SavedInvoice {
    /// Snapshot `invoice` as a new draft.
    pub fn snapshot(invoice: InvoiceDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: InvoiceId::new(),
            status: InvoiceStatus::Draft,
            created_at,
            total: invoice.total(),
            invoice,
        }
    }

    /// Invariant: a paid invoice cannot go back to sent.
    pub fn mark_sent(mut self) -> DomainResult<Self> {
        match self.status {
            InvoiceStatus::Paid => Err(DomainError::conflict("invoice is already paid")),
            _ => {
                self.status = InvoiceStatus::Sent;
                Ok(self)
            }
        }
    }

    pub fn mark_paid(mut self) -> DomainResult<Self> {
        match self.status {
            InvoiceStatus::Paid => Err(DomainError::conflict("invoice is already paid")),
            _ => {
                self.status = InvoiceStatus::Paid;
                Ok(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use docgen_core::DocumentDefaults;

    use crate::invoice::LineItemEdit;

    fn saved() -> SavedInvoice {
        let draft = InvoiceDraft::new(
            &DocumentDefaults::default(),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        );
        let id = draft.line_items[0].id;
        let draft = draft
            .with_line_item_edit(id, LineItemEdit::Rate(100.0))
            .with_tax_rate(16.0);
        SavedInvoice::snapshot(draft, Utc::now())
    }

    #[test]
    fn snapshot_records_total_and_starts_as_draft() {
        let saved = saved();
        assert_eq!(saved.status, InvoiceStatus::Draft);
        assert_eq!(saved.total, 116.0);
    }

    #[test]
    fn snapshot_total_does_not_follow_later_edits() {
        let mut saved = saved();
        saved.invoice = saved.invoice.clone().with_tax_rate(0.0);
        assert_eq!(saved.total, 116.0);
        assert_eq!(saved.invoice.total(), 100.0);
    }

    #[test]
    fn status_moves_forward() {
        let paid = saved().mark_sent().unwrap().mark_paid().unwrap();
        assert_eq!(paid.status, InvoiceStatus::Paid);
    }

    #[test]
    fn paid_invoice_cannot_change_status() {
        let paid = saved().mark_paid().unwrap();
        match paid.clone().mark_sent() {
            Err(DomainError::Conflict(msg)) if msg.contains("already paid") => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert!(matches!(paid.mark_paid(), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn json_flattens_invoice_fields() {
        let json = serde_json::to_value(saved()).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["total"], 116.0);
        assert!(json["invoiceNumber"].is_string());
    }
}
