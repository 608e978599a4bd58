use crate::api::{ApiError, RecordKind, RecordStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ApiError::validation(format!("Unknown priority: {}", value)))
    }
}

impl TryFrom<String> for Priority {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WithdrawalCategory {
    Partial,
    Full,
    Emergency,
    Loan,
}

impl WithdrawalCategory {
    pub const ALL: [WithdrawalCategory; 4] = [
        WithdrawalCategory::Partial,
        WithdrawalCategory::Full,
        WithdrawalCategory::Emergency,
        WithdrawalCategory::Loan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalCategory::Partial => "partial",
            WithdrawalCategory::Full => "full",
            WithdrawalCategory::Emergency => "emergency",
            WithdrawalCategory::Loan => "loan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalCategory::Partial => "Partial",
            WithdrawalCategory::Full => "Full",
            WithdrawalCategory::Emergency => "Emergency",
            WithdrawalCategory::Loan => "Loan",
        }
    }
}

impl FromStr for WithdrawalCategory {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        WithdrawalCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ApiError::validation(format!("Unknown withdrawal type: {}", value)))
    }
}

impl TryFrom<String> for WithdrawalCategory {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WithdrawalCategory> for String {
    fn from(value: WithdrawalCategory) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub request_type: String,
    pub priority: Priority,
    pub status: RecordStatus,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    /// Display-formatted, e.g. `$5,000`.
    pub amount: String,
    pub withdrawal_type: WithdrawalCategory,
    pub reason: String,
    pub status: RecordStatus,
    pub date: NaiveDate,
    pub bank_name: String,
    pub account_number: String,
}

impl WithdrawalRecord {
    pub fn heading(&self) -> String {
        format!("{} Withdrawal", self.withdrawal_type.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TriageRecord {
    Request(RequestRecord),
    Withdrawal(WithdrawalRecord),
}

impl TriageRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            TriageRecord::Request(_) => RecordKind::Request,
            TriageRecord::Withdrawal(_) => RecordKind::Withdrawal,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            TriageRecord::Request(record) => &record.id,
            TriageRecord::Withdrawal(record) => &record.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TriageRecord::Request(record) => &record.name,
            TriageRecord::Withdrawal(record) => &record.name,
        }
    }

    /// Subject for requests, reason for withdrawals.
    pub fn summary_text(&self) -> &str {
        match self {
            TriageRecord::Request(record) => &record.subject,
            TriageRecord::Withdrawal(record) => &record.reason,
        }
    }

    pub fn status(&self) -> RecordStatus {
        match self {
            TriageRecord::Request(record) => record.status,
            TriageRecord::Withdrawal(record) => record.status,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            TriageRecord::Request(record) => record.date,
            TriageRecord::Withdrawal(record) => record.date,
        }
    }

    pub fn title(&self) -> String {
        match self {
            TriageRecord::Request(record) => record.subject.clone(),
            TriageRecord::Withdrawal(record) => record.heading(),
        }
    }

    /// Label/value pairs shown in the detail dialog.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        match self {
            TriageRecord::Request(record) => vec![
                ("ID", record.id.clone()),
                ("Name", record.name.clone()),
                ("Email", record.email.clone()),
                ("Department", record.department.clone()),
                ("Type", record.request_type.clone()),
                ("Priority", record.priority.label().to_string()),
                ("Status", record.status.label().to_string()),
                ("Date", record.date.to_string()),
                ("Description", record.description.clone()),
            ],
            TriageRecord::Withdrawal(record) => vec![
                ("ID", record.id.clone()),
                ("Name", record.name.clone()),
                ("Email", record.email.clone()),
                ("Employee ID", record.employee_id.clone()),
                ("Amount", record.amount.clone()),
                ("Type", record.withdrawal_type.label().to_string()),
                ("Bank", record.bank_name.clone()),
                ("Account", record.account_number.clone()),
                ("Reason", record.reason.clone()),
                ("Status", record.status.label().to_string()),
                ("Date", record.date.to_string()),
            ],
        }
    }
}

impl From<RequestRecord> for TriageRecord {
    fn from(value: RequestRecord) -> Self {
        TriageRecord::Request(value)
    }
}

impl From<WithdrawalRecord> for TriageRecord {
    fn from(value: WithdrawalRecord) -> Self {
        TriageRecord::Withdrawal(value)
    }
}

/// Status selector of the dashboard filter. `All` passes every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RecordStatus),
}

impl StatusFilter {
    pub const OPTIONS: [(&'static str, &'static str); 4] = [
        ("all", "All Status"),
        ("pending", "Pending"),
        ("approved", "Approved"),
        ("rejected", "Rejected"),
    ];

    /// Unknown selector values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return StatusFilter::All;
        }
        match value.parse::<RecordStatus>() {
            Ok(status) => StatusFilter::Only(status),
            Err(_) => {
                log::warn!("Unknown status filter '{}', showing all records", value);
                StatusFilter::All
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn allows(&self, status: RecordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Filtered records split by kind, input order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageView {
    pub requests: Vec<RequestRecord>,
    pub withdrawals: Vec<WithdrawalRecord>,
}

impl TriageView {
    pub fn len(&self) -> usize {
        self.requests.len() + self.withdrawals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<String> {
        self.requests
            .iter()
            .map(|record| record.id.clone())
            .chain(self.withdrawals.iter().map(|record| record.id.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_requests: usize,
    pub total_withdrawals: usize,
    pub pending: usize,
    pub approved_today: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageTab {
    Requests,
    Withdrawals,
}

impl TriageTab {
    pub fn label(&self) -> &'static str {
        match self {
            TriageTab::Requests => "General Requests",
            TriageTab::Withdrawals => "Withdrawals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Status the record would move to.
    pub fn outcome(&self) -> RecordStatus {
        match self {
            ReviewDecision::Approve => RecordStatus::Approved,
            ReviewDecision::Reject => RecordStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCommand {
    pub id: String,
    pub decision: ReviewDecision,
}

impl ReviewCommand {
    pub fn new(id: impl Into<String>, decision: ReviewDecision) -> Self {
        Self {
            id: id.into(),
            decision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewAck {
    pub id: String,
    pub decision: ReviewDecision,
}

impl ReviewAck {
    pub fn toast_title(&self) -> &'static str {
        "Status Updated"
    }

    pub fn toast_description(&self) -> String {
        format!("Request {} has been {}", self.id, self.decision.outcome())
    }
}

impl fmt::Display for ReviewAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.toast_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn priority_parses_any_case() {
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("URGENT".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("critical".parse::<Priority>().is_err());
        assert_eq!(String::from(Priority::High), "high");
    }

    #[test]
    fn triage_record_deserializes_tagged_json() {
        let record: TriageRecord = serde_json::from_value(json!({
            "type": "withdrawal",
            "id": "WDR-009",
            "name": "Ada Obi",
            "email": "ada@company.com",
            "employee_id": "EMP-009",
            "amount": "$1,200",
            "withdrawal_type": "Loan",
            "reason": "School fees",
            "status": "rejected",
            "date": "2025-01-10",
            "bank_name": "Zenith Bank",
            "account_number": "5555555555"
        }))
        .unwrap();
        assert_eq!(record.kind(), RecordKind::Withdrawal);
        assert_eq!(record.summary_text(), "School fees");
        assert_eq!(record.status(), RecordStatus::Rejected);
        assert_eq!(record.title(), "Loan Withdrawal");
        assert_eq!(
            record.date(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
    }

    #[test]
    fn triage_record_rejects_unknown_priority() {
        let result = serde_json::from_value::<TriageRecord>(json!({
            "type": "request",
            "id": "REQ-009",
            "name": "Ada Obi",
            "email": "ada@company.com",
            "department": "IT",
            "subject": "Monitor",
            "request_type": "Equipment",
            "priority": "whenever",
            "status": "pending",
            "date": "2025-01-10",
            "description": "Second monitor"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn status_filter_falls_back_to_all() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
        assert_eq!(StatusFilter::parse("archived"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("Approved"),
            StatusFilter::Only(RecordStatus::Approved)
        );
        assert!(StatusFilter::All.allows(RecordStatus::Rejected));
        assert!(!StatusFilter::Only(RecordStatus::Pending).allows(RecordStatus::Approved));
        assert_eq!(StatusFilter::Only(RecordStatus::Pending).as_str(), "pending");
    }

    #[test]
    fn review_ack_describes_outcome() {
        let ack = ReviewAck {
            id: "WDR-001".into(),
            decision: ReviewDecision::Reject,
        };
        assert_eq!(ack.toast_title(), "Status Updated");
        assert_eq!(ack.toast_description(), "Request WDR-001 has been rejected");
        assert_eq!(
            ReviewDecision::Approve.outcome(),
            RecordStatus::Approved
        );
    }
}
