//! Website audit reports: categorized findings with recommendations.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use docgen_core::{
    AuditId, ClientDetails, DocumentDefaults, DocumentKind, DocumentNumber, Entity, IssueId,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditCategory {
    #[default]
    #[serde(rename = "SEO")]
    Seo,
    Performance,
    Security,
    #[serde(rename = "UI/UX")]
    UiUx,
    Accessibility,
    Content,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueSeverity {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Draft,
    Completed,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssue {
    pub id: IssueId,
    #[serde(default)]
    pub category: AuditCategory,
    #[serde(default)]
    pub severity: IssueSeverity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

impl AuditIssue {
    /// New finding as added by the editing surface: SEO, medium severity.
    pub fn blank() -> Self {
        Self {
            id: IssueId::new(),
            category: AuditCategory::default(),
            severity: IssueSeverity::default(),
            description: String::new(),
            recommendation: String::new(),
        }
    }
}

impl Entity for AuditIssue {
    type Id = IssueId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Number of findings per severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTally {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Audit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: AuditId,
    pub audit_number: DocumentNumber,
    pub date: NaiveDate,
    #[serde(default)]
    pub client: ClientDetails,
    #[serde(default)]
    pub issues: Vec<AuditIssue>,
    #[serde(default)]
    pub notes: String,
    pub status: AuditStatus,
}

impl AuditReport {
    /// Empty draft report dated `today`, with no findings.
    pub fn new(defaults: &DocumentDefaults, today: NaiveDate) -> Self {
        Self {
            id: AuditId::new(),
            audit_number: defaults.next_number(DocumentKind::Audit),
            date: today,
            client: ClientDetails::default(),
            issues: Vec::new(),
            notes: String::new(),
            status: AuditStatus::Draft,
        }
    }

    pub fn new_today(defaults: &DocumentDefaults) -> Self {
        Self::new(defaults, Local::now().date_naive())
    }

    pub fn with_issue(mut self) -> Self {
        self.issues.push(AuditIssue::blank());
        self
    }

    /// Unlike invoice lines, findings may be removed down to none.
    pub fn without_issue(mut self, id: IssueId) -> Self {
        self.issues.retain(|issue| issue.id != id);
        self
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn severity_tally(&self) -> SeverityTally {
        self.issues
            .iter()
            .fold(SeverityTally::default(), |mut tally, issue| {
                match issue.severity {
                    IssueSeverity::High => tally.high += 1,
                    IssueSeverity::Medium => tally.medium += 1,
                    IssueSeverity::Low => tally.low += 1,
                }
                tally
            })
    }

    pub fn completed(mut self) -> Self {
        if self.status != AuditStatus::Completed {
            tracing::debug!(audit = %self.audit_number, issues = self.issues.len(), "audit completed");
        }
        self.status = AuditStatus::Completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AuditReport {
        AuditReport::new(
            &DocumentDefaults::default(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        )
    }

    #[test]
    fn new_report_is_an_empty_draft() {
        let report = report();
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.status, AuditStatus::Draft);
        assert!(report.audit_number.as_str().starts_with("AUD-"));
    }

    #[test]
    fn added_issue_defaults_to_seo_medium() {
        let report = report().with_issue();
        assert_eq!(report.issues[0].category, AuditCategory::Seo);
        assert_eq!(report.issues[0].severity, IssueSeverity::Medium);
    }

    #[test]
    fn issues_can_be_removed_to_zero() {
        let report = report().with_issue();
        let id = report.issues[0].id;
        assert_eq!(report.without_issue(id).issue_count(), 0);
    }

    #[test]
    fn tally_counts_each_severity() {
        let mut report = report().with_issue().with_issue().with_issue();
        report.issues[0].severity = IssueSeverity::High;
        report.issues[2].severity = IssueSeverity::Low;
        assert_eq!(
            report.severity_tally(),
            SeverityTally {
                high: 1,
                medium: 1,
                low: 1,
            }
        );
    }

    #[test]
    fn completing_is_idempotent() {
        let report = report().completed();
        assert_eq!(report.status, AuditStatus::Completed);
        assert_eq!(report.clone().completed(), report);
    }

    #[test]
    fn categories_use_display_names_in_json() {
        let mut issue = AuditIssue::blank();
        issue.category = AuditCategory::UiUx;
        issue.severity = IssueSeverity::High;
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["category"], "UI/UX");
        assert_eq!(json["severity"], "High");
        let seo: AuditCategory = serde_json::from_str("\"SEO\"").unwrap();
        assert_eq!(seo, AuditCategory::Seo);
    }
}
