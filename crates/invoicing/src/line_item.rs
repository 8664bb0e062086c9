//! A single billable entry on an invoice.

use serde::{Deserialize, Serialize};

use docgen_core::{Entity, LineItemId};

/// Invoice line.
///
/// `rate` is the amount charged for the whole line. `quantity` is kept for
/// display and only enters the totals under
/// [`LineAmountRule::RateTimesQuantity`](crate::LineAmountRule).
/// Negative rates are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub rate: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            id: LineItemId::new(),
            description: description.into(),
            quantity,
            rate,
        }
    }

    /// Empty row as added by the editing surface: quantity 1, rate 0.
    pub fn blank() -> Self {
        Self::new(String::new(), default_quantity(), 0.0)
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
