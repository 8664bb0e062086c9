//! Service contracts.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use docgen_core::{ClientDetails, Currency, DocumentDefaults, DocumentKind, DocumentNumber};
use docgen_formatting::{format_date, format_money};

/// Contract draft. The contract value is entered directly, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub contract_number: DocumentNumber,
    pub issue_date: NaiveDate,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub client: ClientDetails,
    #[serde(default)]
    pub service_agreement: String,
    #[serde(default)]
    pub terms_and_conditions: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl ContractDraft {
    /// Empty contract issued and effective `today`.
    pub fn new(defaults: &DocumentDefaults, today: NaiveDate) -> Self {
        Self {
            contract_number: defaults.next_number(DocumentKind::Contract),
            issue_date: today,
            effective_date: today,
            client: ClientDetails::default(),
            service_agreement: String::new(),
            terms_and_conditions: String::new(),
            payment_terms: String::new(),
            currency: defaults.default_currency,
            total_amount: 0.0,
            notes: String::new(),
        }
    }

    pub fn new_today(defaults: &DocumentDefaults) -> Self {
        Self::new(defaults, Local::now().date_naive())
    }

    pub fn formatted_total(&self) -> String {
        format_money(self.total_amount, self.currency)
    }

    pub fn formatted_issue_date(&self) -> String {
        format_date(&self.issue_date)
    }

    pub fn formatted_effective_date(&self) -> String {
        format_date(&self.effective_date)
    }
}
