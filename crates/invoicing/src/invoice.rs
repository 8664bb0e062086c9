//! The invoice being edited.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use docgen_core::{
    ClientDetails, Currency, DocumentDefaults, DocumentKind, DocumentNumber, LineItemId,
};

use crate::arithmetic::{LineAmountRule, Totals};
use crate::line_item::LineItem;

/// A single field change on one line item.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemEdit {
    Description(String),
    Quantity(f64),
    Rate(f64),
}

/// Invoice draft.
///
/// Edits never mutate in place; each `with_*` method consumes the draft and
/// returns the edited value for the caller to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: DocumentNumber,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub client: ClientDetails,
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub notes: String,
}

impl InvoiceDraft {
    /// Empty invoice issued `today`: one blank line, no tax or discount, due
    /// after the configured number of days.
    pub fn new(defaults: &DocumentDefaults, today: NaiveDate) -> Self {
        Self {
            invoice_number: defaults.next_number(DocumentKind::Invoice),
            issue_date: today,
            due_date: add_days(today, defaults.invoice_due_days),
            client: ClientDetails::default(),
            line_items: vec![LineItem::blank()],
            tax_rate: 0.0,
            discount_percent: 0.0,
            currency: defaults.default_currency,
            notes: defaults.invoice_notes.clone(),
        }
    }

    /// [`InvoiceDraft::new`] issued on the current local date.
    pub fn new_today(defaults: &DocumentDefaults) -> Self {
        Self::new(defaults, Local::now().date_naive())
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.line_items, self.tax_rate, self.discount_percent)
    }

    pub fn totals_with(&self, rule: LineAmountRule) -> Totals {
        Totals::compute_with(&self.line_items, self.tax_rate, self.discount_percent, rule)
    }

    pub fn total(&self) -> f64 {
        self.totals().total
    }

    pub fn line_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    /// Append a blank line item.
    pub fn with_line_item(mut self) -> Self {
        self.line_items.push(LineItem::blank());
        self
    }

    /// Remove the line item with `id`.
    ///
    /// An invoice always keeps at least one line: removing the last one is a
    /// no-op, as is removing an unknown id.
    pub fn without_line_item(mut self, id: LineItemId) -> Self {
        if self.line_items.len() <= 1 {
            tracing::debug!(%id, "refusing to remove the only line item");
            return self;
        }
        self.line_items.retain(|item| item.id != id);
        self
    }

    /// Apply `edit` to the line item with `id`; unknown ids leave the draft as is.
    pub fn with_line_item_edit(mut self, id: LineItemId, edit: LineItemEdit) -> Self {
        if let Some(item) = self.line_items.iter_mut().find(|item| item.id == id) {
            match edit {
                LineItemEdit::Description(description) => item.description = description,
                LineItemEdit::Quantity(quantity) => item.quantity = quantity,
                LineItemEdit::Rate(rate) => item.rate = rate,
            }
        }
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_discount_percent(mut self, discount_percent: f64) -> Self {
        self.discount_percent = discount_percent;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_client(mut self, client: ClientDetails) -> Self {
        self.client = client;
        self
    }
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
