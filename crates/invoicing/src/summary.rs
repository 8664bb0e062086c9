//! Formatted values the invoice preview displays.

use serde::{Deserialize, Serialize};

use docgen_formatting::{format_date, format_money, format_number};

use crate::arithmetic::{LineAmountRule, line_amount_with};
use crate::invoice::InvoiceDraft;

/// One rendered line of the items table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

/// A labelled tax or discount row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRow {
    /// e.g. `Tax (16%)`
    pub label: String,
    pub amount: String,
}

/// Every display string the preview needs, derived from one invoice value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub bill_to: String,
    pub lines: Vec<SummaryLine>,
    pub subtotal: String,
    /// Present only when the tax rate is positive.
    pub tax: Option<AdjustmentRow>,
    /// Present only when the discount is positive; the amount carries a leading `-`.
    pub discount: Option<AdjustmentRow>,
    pub total: String,
}

impl InvoiceSummary {
    pub fn render(invoice: &InvoiceDraft) -> Self {
        Self::render_with(invoice, LineAmountRule::RateOnly)
    }

    pub fn render_with(invoice: &InvoiceDraft, rule: LineAmountRule) -> Self {
        let currency = invoice.currency;
        let totals = invoice.totals_with(rule);

        let lines = invoice
            .line_items
            .iter()
            .map(|item| SummaryLine {
                description: item.description.clone(),
                quantity: format_number(item.quantity),
                rate: format_money(item.rate, currency),
                amount: format_money(line_amount_with(item, rule), currency),
            })
            .collect();

        let tax = (invoice.tax_rate > 0.0).then(|| AdjustmentRow {
            label: format!("Tax ({}%)", format_number(invoice.tax_rate)),
            amount: format_money(totals.tax, currency),
        });

        let discount = (invoice.discount_percent > 0.0).then(|| AdjustmentRow {
            label: format!("Discount ({}%)", format_number(invoice.discount_percent)),
            amount: format!("-{}", format_money(totals.discount, currency)),
        });

        Self {
            invoice_number: invoice.invoice_number.to_string(),
            issue_date: format_date(&invoice.issue_date),
            due_date: format_date(&invoice.due_date),
            bill_to: invoice.client.display_name().to_string(),
            lines,
            subtotal: format_money(totals.subtotal, currency),
            tax,
            discount,
            total: format_money(totals.total, currency),
        }
    }
}

impl core::fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Invoice {}", self.invoice_number)?;
        writeln!(f, "Bill to: {}", self.bill_to)?;
        writeln!(f, "Issued: {}  Due: {}", self.issue_date, self.due_date)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "  {:<32} {:>6} {:>16}", line.description, line.quantity, line.amount)?;
        }
        writeln!(f)?;
        writeln!(f, "  {:<39} {:>16}", "Subtotal", self.subtotal)?;
        if let Some(tax) = &self.tax {
            writeln!(f, "  {:<39} {:>16}", tax.label, tax.amount)?;
        }
        if let Some(discount) = &self.discount {
            writeln!(f, "  {:<39} {:>16}", discount.label, discount.amount)?;
        }
        write!(f, "  {:<39} {:>16}", "Total", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use docgen_core::{ClientDetails, Currency, DocumentDefaults};

    use crate::invoice::LineItemEdit;

    fn invoice() -> InvoiceDraft {
        let draft = InvoiceDraft::new(
            &DocumentDefaults::default(),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        );
        let id = draft.line_items[0].id;
        draft
            .with_line_item_edit(id, LineItemEdit::Description("Website redesign".into()))
            .with_line_item_edit(id, LineItemEdit::Rate(1234.5))
            .with_currency(Currency::Usd)
    }

    #[test]
    fn zero_rates_hide_adjustment_rows() {
        let summary = InvoiceSummary::render(&invoice());
        assert_eq!(summary.subtotal, "$1,234.50");
        assert_eq!(summary.total, "$1,234.50");
        assert!(summary.tax.is_none());
        assert!(summary.discount.is_none());
        assert_eq!(summary.issue_date, "05 Mar 2025");
        assert_eq!(summary.due_date, "19 Mar 2025");
        assert_eq!(summary.bill_to, "Client");
    }

    #[test]
    fn positive_rates_show_labelled_rows() {
        let summary = InvoiceSummary::render(
            &invoice()
                .with_tax_rate(7.5)
                .with_discount_percent(10.0)
                .with_client(ClientDetails {
                    name: "Amina".into(),
                    ..ClientDetails::default()
                }),
        );
        let tax = summary.tax.unwrap();
        assert_eq!(tax.label, "Tax (7.5%)");
        assert_eq!(tax.amount, "$92.59");
        let discount = summary.discount.unwrap();
        assert_eq!(discount.label, "Discount (10%)");
        assert_eq!(discount.amount, "-$123.45");
        assert_eq!(summary.bill_to, "Amina");
    }

    #[test]
    fn negative_rates_hide_rows_but_still_count() {
        let summary = InvoiceSummary::render(&invoice().with_tax_rate(-10.0));
        assert!(summary.tax.is_none());
        assert_eq!(summary.total, "$1,111.05");
    }

    #[test]
    fn lines_show_rate_as_amount() {
        let summary = InvoiceSummary::render(&invoice());
        assert_eq!(
            summary.lines,
            vec![SummaryLine {
                description: "Website redesign".into(),
                quantity: "1".into(),
                rate: "$1,234.50".into(),
                amount: "$1,234.50".into(),
            }]
        );
    }

    #[test]
    fn quantity_rule_changes_line_amounts_and_totals() {
        let draft = invoice();
        let id = draft.line_items[0].id;
        let draft = draft.with_line_item_edit(id, LineItemEdit::Quantity(2.0));
        let summary = InvoiceSummary::render_with(&draft, LineAmountRule::RateTimesQuantity);
        assert_eq!(summary.lines[0].quantity, "2");
        assert_eq!(summary.lines[0].rate, "$1,234.50");
        assert_eq!(summary.lines[0].amount, "$2,469.00");
        assert_eq!(summary.total, "$2,469.00");
        assert_eq!(InvoiceSummary::render(&draft).total, "$1,234.50");
    }

    #[test]
    fn display_lists_total_last() {
        let text = InvoiceSummary::render(&invoice().with_tax_rate(16.0)).to_string();
        assert!(text.starts_with("Invoice WMN-"));
        assert!(text.contains("Tax (16%)"));
        assert!(text.trim_end().ends_with("$1,432.02"));
    }
}
