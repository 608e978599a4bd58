use crate::api::{ApiError, CreateWithdrawalRequest};
use crate::components::forms::{option, SelectOption};
use leptos::*;

pub const BANKS: &[SelectOption] = &[
    option("first-bank", "First Bank of Nigeria"),
    option("gtbank", "Guaranty Trust Bank"),
    option("zenith", "Zenith Bank"),
    option("uba", "United Bank for Africa"),
    option("access", "Access Bank"),
    option("fidelity", "Fidelity Bank"),
    option("other", "Other"),
];

pub const WITHDRAWAL_TYPES: &[SelectOption] = &[
    option("partial", "Partial Withdrawal"),
    option("full", "Full Withdrawal"),
    option("emergency", "Emergency Withdrawal"),
    option("loan", "Loan Against Savings"),
];

#[derive(Clone, Copy)]
pub struct WithdrawalFormState {
    pub full_name: RwSignal<String>,
    pub employee_id: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub bank_name: RwSignal<String>,
    pub account_number: RwSignal<String>,
    pub current_balance: RwSignal<String>,
    pub withdrawal_amount: RwSignal<String>,
    pub withdrawal_type: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub emergency_contact: RwSignal<String>,
    pub emergency_phone: RwSignal<String>,
}

impl Default for WithdrawalFormState {
    fn default() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            employee_id: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            bank_name: create_rw_signal(String::new()),
            account_number: create_rw_signal(String::new()),
            current_balance: create_rw_signal(String::new()),
            withdrawal_amount: create_rw_signal(String::new()),
            withdrawal_type: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            emergency_contact: create_rw_signal(String::new()),
            emergency_phone: create_rw_signal(String::new()),
        }
    }
}

fn trimmed(field: RwSignal<String>) -> String {
    field.with(|value| value.trim().to_string())
}

impl WithdrawalFormState {
    fn fields(&self) -> [(&'static str, RwSignal<String>); 12] {
        [
            ("Full Name", self.full_name),
            ("Employee ID", self.employee_id),
            ("Email Address", self.email),
            ("Phone Number", self.phone),
            ("Bank Name", self.bank_name),
            ("Account Number", self.account_number),
            ("Current Savings Balance", self.current_balance),
            ("Withdrawal Amount", self.withdrawal_amount),
            ("Withdrawal Type", self.withdrawal_type),
            ("Reason for Withdrawal", self.reason),
            ("Emergency Contact Name", self.emergency_contact),
            ("Emergency Contact Phone", self.emergency_phone),
        ]
    }

    pub fn reset(&self) {
        for (_, field) in self.fields() {
            field.set(String::new());
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, field)| field.with(|value| value.trim().is_empty()))
            .map(|(label, _)| label)
            .collect()
    }

    /// Amounts are kept as entered; only presence is checked.
    pub fn to_payload(&self) -> Result<CreateWithdrawalRequest, ApiError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::missing_fields(&missing));
        }
        Ok(CreateWithdrawalRequest {
            full_name: trimmed(self.full_name),
            employee_id: trimmed(self.employee_id),
            email: trimmed(self.email),
            phone: trimmed(self.phone),
            bank_name: self.bank_name.get(),
            account_number: trimmed(self.account_number),
            current_balance: trimmed(self.current_balance),
            withdrawal_amount: trimmed(self.withdrawal_amount),
            withdrawal_type: self.withdrawal_type.get(),
            reason: trimmed(self.reason),
            emergency_contact: trimmed(self.emergency_contact),
            emergency_phone: trimmed(self.emergency_phone),
        })
    }
}

#[cfg(test)]
pub(crate) fn fill_sample(state: &WithdrawalFormState) {
    state.full_name.set("Jane Smith".into());
    state.employee_id.set(" EMP-001 ".into());
    state.email.set("jane@company.com".into());
    state.phone.set("+234 800 111 2222".into());
    state.bank_name.set("first-bank".into());
    state.account_number.set("0123456789".into());
    state.current_balance.set("12000.00".into());
    state.withdrawal_amount.set("5000".into());
    state.withdrawal_type.set("partial".into());
    state.reason.set("Home renovation".into());
    state.emergency_contact.set("John Smith".into());
    state.emergency_phone.set("+234 800 333 4444".into());
}
