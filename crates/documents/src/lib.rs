//! Proposals, contracts and audit reports.
//!
//! These documents carry no tax arithmetic; they reuse the shared numbering,
//! client block and formatting.

pub mod audit;
pub mod contract;
pub mod proposal;

pub use audit::{AuditCategory, AuditIssue, AuditReport, AuditStatus, IssueSeverity, SeverityTally};
pub use contract::ContractDraft;
pub use proposal::{CostItem, ProposalDraft, ScopeItem};
