//! Project proposals: scope of work and indicative costs.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use docgen_core::{
    ClientDetails, CostItemId, Currency, DocumentDefaults, DocumentKind, DocumentNumber, Entity,
    ScopeItemId,
};
use docgen_formatting::format_money;

/// One deliverable in the proposed scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeItem {
    pub id: ScopeItemId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deliverable: String,
}

impl ScopeItem {
    pub fn blank() -> Self {
        Self {
            id: ScopeItemId::new(),
            description: String::new(),
            deliverable: String::new(),
        }
    }
}

impl Entity for ScopeItem {
    type Id = ScopeItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One priced component of the proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: CostItemId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

impl CostItem {
    pub fn blank() -> Self {
        Self {
            id: CostItemId::new(),
            description: String::new(),
            amount: 0.0,
        }
    }
}

impl Entity for CostItem {
    type Id = CostItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Proposal draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub proposal_number: DocumentNumber,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(default)]
    pub client: ClientDetails,
    #[serde(default)]
    pub project_overview: String,
    pub scope_items: Vec<ScopeItem>,
    #[serde(default)]
    pub cost_items: Vec<CostItem>,
    #[serde(default)]
    pub excluded_work: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub general_requirements: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub notes: String,
}

impl ProposalDraft {
    /// Empty proposal issued `today` with one blank scope row and one blank cost row.
    pub fn new(defaults: &DocumentDefaults, today: NaiveDate) -> Self {
        Self {
            proposal_number: defaults.next_number(DocumentKind::Proposal),
            issue_date: today,
            valid_until: today
                .checked_add_days(Days::new(u64::from(defaults.proposal_valid_days)))
                .unwrap_or(NaiveDate::MAX),
            client: ClientDetails::default(),
            project_overview: String::new(),
            scope_items: vec![ScopeItem::blank()],
            cost_items: vec![CostItem::blank()],
            excluded_work: String::new(),
            timeline: String::new(),
            general_requirements: String::new(),
            currency: defaults.default_currency,
            notes: String::new(),
        }
    }

    pub fn new_today(defaults: &DocumentDefaults) -> Self {
        Self::new(defaults, Local::now().date_naive())
    }

    pub fn with_scope_item(mut self) -> Self {
        self.scope_items.push(ScopeItem::blank());
        self
    }

    /// Removing the only scope item is a no-op.
    pub fn without_scope_item(mut self, id: ScopeItemId) -> Self {
        if self.scope_items.len() > 1 {
            self.scope_items.retain(|item| item.id != id);
        }
        self
    }

    pub fn with_cost_item(mut self) -> Self {
        self.cost_items.push(CostItem::blank());
        self
    }

    /// Removing the only cost item is a no-op.
    pub fn without_cost_item(mut self, id: CostItemId) -> Self {
        if self.cost_items.len() > 1 {
            self.cost_items.retain(|item| item.id != id);
        }
        self
    }

    /// Sum of cost item amounts; `0.0` without any.
    pub fn cost_total(&self) -> f64 {
        self.cost_items.iter().fold(0.0, |acc, item| acc + item.amount)
    }

    pub fn formatted_cost_total(&self) -> String {
        format_money(self.cost_total(), self.currency)
    }
}
