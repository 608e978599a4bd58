use super::types::{ReviewAck, ReviewDecision, TriageRecord};
use crate::api::ApiError;
use std::rc::Rc;

const SEED_RECORDS: &str = include_str!("fixtures.json");

/// Source of the records shown on the review dashboard.
pub trait TriageRepository {
    fn list_records(&self) -> Result<Vec<TriageRecord>, ApiError>;

    /// Acknowledges a decision for `id`. Stored records are left untouched.
    fn review(&self, id: &str, decision: ReviewDecision) -> Result<ReviewAck, ApiError>;
}

/// Read-only repository over the embedded seed records.
#[derive(Clone, Debug, Default)]
pub struct FixtureRepository {
    records: Rc<Vec<TriageRecord>>,
}

impl FixtureRepository {
    pub fn seeded() -> Result<Self, ApiError> {
        Self::from_json(SEED_RECORDS)
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        let records: Vec<TriageRecord> = serde_json::from_str(raw)
            .map_err(|err| ApiError::unknown(format!("Failed to parse seed records: {}", err)))?;
        log::debug!("Loaded {} triage records", records.len());
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<TriageRecord>) -> Self {
        Self {
            records: Rc::new(records),
        }
    }
}

impl TriageRepository for FixtureRepository {
    fn list_records(&self) -> Result<Vec<TriageRecord>, ApiError> {
        Ok(self.records.as_ref().clone())
    }

    fn review(&self, id: &str, decision: ReviewDecision) -> Result<ReviewAck, ApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::validation("Record ID is required."));
        }
        if !self.records.iter().any(|record| record.id() == id) {
            return Err(ApiError::not_found(format!("Record {} not found", id)));
        }
        log::info!("Review decision {:?} acknowledged for {}", decision, id);
        Ok(ReviewAck {
            id: id.to_string(),
            decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RecordKind, RecordStatus};

    #[test]
    fn seeded_repository_loads_every_record() {
        let repo = FixtureRepository::seeded().unwrap();
        let records = repo.list_records().unwrap();
        let ids: Vec<&str> = records.iter().map(|record| record.id()).collect();
        assert_eq!(ids, vec!["REQ-001", "REQ-002", "WDR-001", "WDR-002"]);
        assert_eq!(
            records
                .iter()
                .filter(|record| record.kind() == RecordKind::Withdrawal)
                .count(),
            2
        );
    }

    #[test]
    fn review_acknowledges_without_mutation() {
        let repo = FixtureRepository::seeded().unwrap();
        let ack = repo.review("REQ-001", ReviewDecision::Approve).unwrap();
        assert_eq!(ack.toast_description(), "Request REQ-001 has been approved");

        let records = repo.list_records().unwrap();
        let first = records.iter().find(|record| record.id() == "REQ-001").unwrap();
        assert_eq!(first.status(), RecordStatus::Pending);
    }

    #[test]
    fn review_rejects_unknown_or_blank_ids() {
        let repo = FixtureRepository::seeded().unwrap();
        let missing = repo.review("WDR-404", ReviewDecision::Reject).unwrap_err();
        assert_eq!(missing.code, "NOT_FOUND");
        assert_eq!(missing.error, "Record WDR-404 not found");

        let blank = repo.review("  ", ReviewDecision::Approve).unwrap_err();
        assert_eq!(blank.code, "VALIDATION_ERROR");
    }

    #[test]
    fn malformed_json_maps_to_unknown_error() {
        let err = FixtureRepository::from_json("{not json").unwrap_err();
        assert_eq!(err.code, "UNKNOWN");
        assert!(err.error.starts_with("Failed to parse seed records"));
    }
}
