use super::types::{StatusFilter, SummaryCounters, TriageRecord, TriageView};
use crate::api::RecordStatus;
use chrono::NaiveDate;
use leptos::*;

/// Case-insensitive substring match on name, identifier, or summary text.
pub fn matches_search(record: &TriageRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [record.name(), record.id(), record.summary_text()]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_records(records: &[TriageRecord], term: &str, status: StatusFilter) -> TriageView {
    let mut view = TriageView::default();
    for record in records
        .iter()
        .filter(|record| matches_search(record, term) && status.allows(record.status()))
    {
        match record {
            TriageRecord::Request(request) => view.requests.push(request.clone()),
            TriageRecord::Withdrawal(withdrawal) => view.withdrawals.push(withdrawal.clone()),
        }
    }
    view
}

/// Counters over the full record set; search and status filter do not apply.
pub fn summary_counters(records: &[TriageRecord], processing_date: NaiveDate) -> SummaryCounters {
    records
        .iter()
        .fold(SummaryCounters::default(), |mut counters, record| {
            match record {
                TriageRecord::Request(_) => counters.total_requests += 1,
                TriageRecord::Withdrawal(_) => counters.total_withdrawals += 1,
            }
            match record.status() {
                RecordStatus::Pending => counters.pending += 1,
                RecordStatus::Approved if record.date() == processing_date => {
                    counters.approved_today += 1
                }
                _ => {}
            }
            counters
        })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriageFilterSnapshot {
    pub search: String,
    pub status: StatusFilter,
}

#[derive(Clone, Copy)]
pub struct TriageFilterState {
    search: RwSignal<String>,
    status: RwSignal<String>,
}

impl Default for TriageFilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageFilterState {
    pub fn new() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            status: create_rw_signal(StatusFilter::All.as_str().to_string()),
        }
    }

    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn snapshot(&self) -> TriageFilterSnapshot {
        TriageFilterSnapshot {
            search: self.search.get(),
            status: StatusFilter::parse(&self.status.get()),
        }
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.status.set(StatusFilter::All.as_str().to_string());
    }
}
