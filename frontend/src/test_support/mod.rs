#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::RecordStatus;
    use crate::pages::admin::repository::{FixtureRepository, TriageRepository};
    use crate::pages::admin::types::{
        Priority, RequestRecord, TriageRecord, WithdrawalCategory, WithdrawalRecord,
    };
    use chrono::NaiveDate;

    pub fn request_record(id: &str, name: &str, subject: &str, status: RecordStatus) -> TriageRecord {
        TriageRecord::Request(RequestRecord {
            id: id.into(),
            name: name.into(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            department: "IT".into(),
            subject: subject.into(),
            request_type: "Equipment".into(),
            priority: Priority::Medium,
            status,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: format!("{} details", subject),
        })
    }

    pub fn withdrawal_record(id: &str, name: &str, reason: &str, status: RecordStatus) -> TriageRecord {
        TriageRecord::Withdrawal(WithdrawalRecord {
            id: id.into(),
            name: name.into(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            employee_id: "EMP-100".into(),
            amount: "$1,000".into(),
            withdrawal_type: WithdrawalCategory::Partial,
            reason: reason.into(),
            status,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            bank_name: "First Bank".into(),
            account_number: "1111111111".into(),
        })
    }

    pub fn seed_records() -> Vec<TriageRecord> {
        FixtureRepository::seeded()
            .and_then(|repo| repo.list_records())
            .expect("seed records")
    }
}
