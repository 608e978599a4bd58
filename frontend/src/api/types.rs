use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    /// Validation failure listing every offending field.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self {
            error: "Please fill in all required fields.".to_string(),
            code: "VALIDATION_ERROR".to_string(),
            details: Some(json!({
                "errors": fields
                    .iter()
                    .map(|field| format!("{} is required", field))
                    .collect::<Vec<_>>()
            })),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NOT_FOUND".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Request,
    Withdrawal,
}

impl RecordKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RecordKind::Request => "REQ",
            RecordKind::Withdrawal => "WDR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Pending,
        RecordStatus::Approved,
        RecordStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Approved => "approved",
            RecordStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RecordStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ApiError::validation(format!("Unknown status: {}", value)))
    }
}

/// Payload collected by the general request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub request_type: String,
    pub priority: String,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Payload collected by the savings withdrawal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWithdrawalRequest {
    pub full_name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub bank_name: String,
    pub account_number: String,
    pub current_balance: String,
    pub withdrawal_amount: String,
    pub withdrawal_type: String,
    pub reason: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub kind: RecordKind,
}

impl SubmissionReceipt {
    pub fn new(kind: RecordKind, suffix: u16) -> Self {
        Self {
            id: format!("{}-{}", kind.id_prefix(), suffix),
            kind,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            RecordKind::Request => "Request Submitted Successfully",
            RecordKind::Withdrawal => "Withdrawal Application Submitted",
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            RecordKind::Request => format!(
                "Your request has been submitted and assigned ID #{}. You will receive an email confirmation shortly.",
                self.id
            ),
            RecordKind::Withdrawal => format!(
                "Your withdrawal application has been submitted with ID #{}. It will be reviewed within 2-3 business days.",
                self.id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::not_found("gone").code, "NOT_FOUND");
        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
        assert_eq!(
            ApiError::request_failed("network error").code,
            "REQUEST_FAILED"
        );
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn missing_fields_lists_each_field() {
        let error = ApiError::missing_fields(&["Full Name", "Email Address"]);
        assert_eq!(error.code, "VALIDATION_ERROR");
        let errors = error
            .details
            .as_ref()
            .and_then(|details| details.get("errors"))
            .and_then(|errors| errors.as_array())
            .cloned()
            .unwrap_or_default();
        assert_eq!(
            errors,
            vec![
                json!("Full Name is required"),
                json!("Email Address is required")
            ]
        );
    }

    #[test]
    fn record_status_parses_case_insensitively() {
        assert_eq!(
            "Approved".parse::<RecordStatus>().unwrap(),
            RecordStatus::Approved
        );
        assert_eq!(
            " pending ".parse::<RecordStatus>().unwrap(),
            RecordStatus::Pending
        );
        assert!("cancelled".parse::<RecordStatus>().is_err());
        assert_eq!(RecordStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn receipt_messages_embed_identifier() {
        let request = SubmissionReceipt::new(RecordKind::Request, 42);
        assert_eq!(request.id, "REQ-42");
        assert!(request.message().contains("#REQ-42"));
        assert_eq!(request.title(), "Request Submitted Successfully");

        let withdrawal = SubmissionReceipt::new(RecordKind::Withdrawal, 7);
        assert_eq!(withdrawal.id, "WDR-7");
        assert!(withdrawal.message().contains("2-3 business days"));
    }
}
