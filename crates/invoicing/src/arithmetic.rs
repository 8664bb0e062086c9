//! Derived invoice values: subtotal, tax, discount and total.
//!
//! All functions are total over `f64`. Out-of-range percentages and negative
//! rates are accepted as-is, and NaN propagates instead of panicking; callers
//! coerce cleared form fields to `0` before calling in.

use serde::{Deserialize, Serialize};

use docgen_core::ValueObject;

use crate::line_item::LineItem;

/// How a line's amount is derived from its fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineAmountRule {
    /// The rate is the line amount; quantity is informational.
    #[default]
    RateOnly,
    /// The line amount is `rate × quantity`.
    RateTimesQuantity,
}

/// Amount contributed by one line under the default [`LineAmountRule::RateOnly`].
pub fn line_amount(item: &LineItem) -> f64 {
    line_amount_with(item, LineAmountRule::RateOnly)
}

pub fn line_amount_with(item: &LineItem, rule: LineAmountRule) -> f64 {
    match rule {
        LineAmountRule::RateOnly => item.rate,
        LineAmountRule::RateTimesQuantity => item.rate * item.quantity,
    }
}

/// Sum of line amounts. An empty slice sums to `0.0`.
pub fn subtotal(items: &[LineItem]) -> f64 {
    subtotal_with(items, LineAmountRule::RateOnly)
}

fn subtotal_with(items: &[LineItem], rule: LineAmountRule) -> f64 {
    // `Iterator::sum` on floats starts from -0.0; an empty invoice must read as +0.
    items
        .iter()
        .fold(0.0, |acc, item| acc + line_amount_with(item, rule))
}

/// `subtotal × tax_rate_percent / 100`.
pub fn tax_amount(subtotal: f64, tax_rate_percent: f64) -> f64 {
    subtotal * tax_rate_percent / 100.0
}

/// `subtotal × discount_percent / 100`.
pub fn discount_amount(subtotal: f64, discount_percent: f64) -> f64 {
    subtotal * discount_percent / 100.0
}

/// `subtotal + tax − discount`. Not floored at zero.
pub fn total(items: &[LineItem], tax_rate_percent: f64, discount_percent: f64) -> f64 {
    Totals::compute(items, tax_rate_percent, discount_percent).total
}

/// Every derived amount of an invoice, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}

impl ValueObject for Totals {}

impl Totals {
    pub fn compute(items: &[LineItem], tax_rate_percent: f64, discount_percent: f64) -> Self {
        Self::compute_with(items, tax_rate_percent, discount_percent, LineAmountRule::RateOnly)
    }

    pub fn compute_with(
        items: &[LineItem],
        tax_rate_percent: f64,
        discount_percent: f64,
        rule: LineAmountRule,
    ) -> Self {
        let subtotal = subtotal_with(items, rule);
        let tax = tax_amount(subtotal, tax_rate_percent);
        let discount = discount_amount(subtotal, discount_percent);
        Self {
            subtotal,
            tax,
            discount,
            total: subtotal + tax - discount,
        }
    }
}
