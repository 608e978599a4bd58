use crate::api::{ApiError, CreateServiceRequest};
use crate::components::forms::{option, SelectOption};
use leptos::*;

pub const DEPARTMENTS: &[SelectOption] = &[
    option("hr", "Human Resources"),
    option("finance", "Finance"),
    option("it", "Information Technology"),
    option("operations", "Operations"),
    option("marketing", "Marketing"),
    option("legal", "Legal"),
    option("other", "Other"),
];

pub const REQUEST_TYPES: &[SelectOption] = &[
    option("equipment", "Equipment Request"),
    option("leave", "Leave Application"),
    option("reimbursement", "Expense Reimbursement"),
    option("access", "System Access"),
    option("training", "Training Request"),
    option("maintenance", "Maintenance"),
    option("other", "Other"),
];

pub const PRIORITIES: &[SelectOption] = &[
    option("low", "Low"),
    option("medium", "Medium"),
    option("high", "High"),
    option("urgent", "Urgent"),
];

pub const ATTACHMENT_ACCEPT: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png";

/// Editable state of the general request form, one signal per field.
#[derive(Clone, Copy)]
pub struct RequestFormState {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub department: RwSignal<String>,
    pub request_type: RwSignal<String>,
    pub priority: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub description: RwSignal<String>,
    /// File names only; nothing is uploaded.
    pub attachments: RwSignal<Vec<String>>,
}

impl Default for RequestFormState {
    fn default() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            request_type: create_rw_signal(String::new()),
            priority: create_rw_signal(String::new()),
            subject: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            attachments: create_rw_signal(Vec::new()),
        }
    }
}

impl RequestFormState {
    fn required(&self) -> [(&'static str, RwSignal<String>); 8] {
        [
            ("Full Name", self.full_name),
            ("Email Address", self.email),
            ("Phone Number", self.phone),
            ("Department", self.department),
            ("Request Type", self.request_type),
            ("Priority Level", self.priority),
            ("Subject", self.subject),
            ("Detailed Description", self.description),
        ]
    }

    pub fn reset(&self) {
        for (_, field) in self.required() {
            field.set(String::new());
        }
        self.attachments.set(Vec::new());
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required()
            .into_iter()
            .filter(|(_, field)| field.with(|value| value.trim().is_empty()))
            .map(|(label, _)| label)
            .collect()
    }

    pub fn to_payload(&self) -> Result<CreateServiceRequest, ApiError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::missing_fields(&missing));
        }
        Ok(CreateServiceRequest {
            full_name: self.full_name.get().trim().to_string(),
            email: self.email.get().trim().to_string(),
            phone: self.phone.get().trim().to_string(),
            department: self.department.get(),
            request_type: self.request_type.get(),
            priority: self.priority.get(),
            subject: self.subject.get().trim().to_string(),
            description: self.description.get().trim().to_string(),
            attachments: self.attachments.get(),
        })
    }
}

#[cfg(test)]
pub(crate) fn fill_sample(state: &RequestFormState) {
    state.full_name.set("John Doe".into());
    state.email.set("john@company.com".into());
    state.phone.set("+234 800 000 0000".into());
    state.department.set("it".into());
    state.request_type.set("equipment".into());
    state.priority.set("medium".into());
    state.subject.set("  New laptop request ".into());
    state.description.set("Need a new laptop for development work".into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn empty_form_reports_every_required_field() {
        with_runtime(|| {
            let state = RequestFormState::default();
            assert_eq!(state.missing_fields().len(), 8);
            let err = state.to_payload().unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(err.error, "Please fill in all required fields.");
        });
    }

    #[test]
    fn whitespace_counts_as_missing() {
        with_runtime(|| {
            let state = RequestFormState::default();
            fill_sample(&state);
            state.subject.set("   ".into());
            assert_eq!(state.missing_fields(), vec!["Subject"]);
        });
    }

    #[test]
    fn complete_form_builds_trimmed_payload() {
        with_runtime(|| {
            let state = RequestFormState::default();
            fill_sample(&state);
            state.attachments.set(vec!["quote.pdf".into()]);
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.subject, "New laptop request");
            assert_eq!(payload.department, "it");
            assert_eq!(payload.attachments, vec!["quote.pdf".to_string()]);
        });
    }

    #[test]
    fn reset_clears_fields_and_attachments() {
        with_runtime(|| {
            let state = RequestFormState::default();
            fill_sample(&state);
            state.attachments.set(vec!["photo.png".into()]);
            state.reset();
            assert_eq!(state.missing_fields().len(), 8);
            assert!(state.attachments.get().is_empty());
        });
    }

    #[test]
    fn option_lists_have_unique_values() {
        for options in [DEPARTMENTS, REQUEST_TYPES, PRIORITIES] {
            let mut values: Vec<&str> = options.iter().map(|opt| opt.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), options.len());
        }
    }
}
