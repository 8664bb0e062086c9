//! Invoicing: line items, derived totals and the invoice preview.
//!
//! Everything here is deterministic, side-effect free arithmetic over plain
//! values. Callers hold the current invoice, pass it in, and store whatever
//! edited value comes back.

pub mod arithmetic;
pub mod invoice;
pub mod line_item;
pub mod saved;
pub mod summary;

pub use arithmetic::{
    LineAmountRule, Totals, discount_amount, line_amount, line_amount_with, subtotal, tax_amount,
    total,
};
pub use invoice::{InvoiceDraft, LineItemEdit};
pub use line_item::LineItem;
pub use saved::{InvoiceStatus, SavedInvoice};
pub use summary::{AdjustmentRow, InvoiceSummary, SummaryLine};
