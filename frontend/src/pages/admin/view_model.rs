use super::{
    repository::{FixtureRepository, TriageRepository},
    types::{ReviewAck, ReviewCommand, SummaryCounters, TriageRecord, TriageTab, TriageView},
    utils::{filter_records, summary_counters, TriageFilterState},
};
use crate::api::ApiError;
use crate::config;
use crate::state::toast::{use_toast, ToastState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub filter_state: TriageFilterState,
    pub records: RwSignal<Vec<TriageRecord>>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub active_tab: RwSignal<TriageTab>,
    pub selected: RwSignal<Option<TriageRecord>>,
    pub review_action: Action<ReviewCommand, Result<ReviewAck, ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub filtered: Memo<TriageView>,
    pub counters: Memo<SummaryCounters>,
}

fn apply_review_result(
    result: Option<Result<ReviewAck, ApiError>>,
    toast: ToastState,
    action_error: RwSignal<Option<ApiError>>,
) {
    match result {
        Some(Ok(ack)) => {
            action_error.set(None);
            toast.show(ack.toast_title(), ack.toast_description());
        }
        Some(Err(err)) => {
            log::warn!("Review failed: {}", err);
            toast.show_error("Update failed", err.error.clone());
            action_error.set(Some(err));
        }
        None => {}
    }
}

fn load_records<R: TriageRepository>(
    repo: &R,
    records: RwSignal<Vec<TriageRecord>>,
    load_error: RwSignal<Option<ApiError>>,
) {
    match repo.list_records() {
        Ok(items) => {
            records.set(items);
            load_error.set(None);
        }
        Err(err) => {
            log::error!("Failed to load triage records: {}", err);
            records.set(Vec::new());
            load_error.set(Some(err));
        }
    }
}

impl AdminViewModel {
    pub fn new() -> Self {
        let repository = match FixtureRepository::seeded() {
            Ok(repo) => repo,
            Err(err) => {
                log::error!("Seed records unavailable: {}", err);
                FixtureRepository::default()
            }
        };
        Self::with_repository(repository)
    }

    pub fn with_repository(repository: FixtureRepository) -> Self {
        let processing_date = config::current().processing_date;
        let toast = use_toast();
        let repository = store_value(repository);

        let filter_state = TriageFilterState::new();
        let records = create_rw_signal(Vec::<TriageRecord>::new());
        let load_error = create_rw_signal(None::<ApiError>);
        repository.with_value(|repo| load_records(repo, records, load_error));

        let active_tab = create_rw_signal(TriageTab::Requests);
        let selected = create_rw_signal(None::<TriageRecord>);
        let action_error = create_rw_signal(None::<ApiError>);

        let filtered = create_memo(move |_| {
            let snapshot = filter_state.snapshot();
            records.with(|items| filter_records(items, &snapshot.search, snapshot.status))
        });
        let counters =
            create_memo(move |_| records.with(|items| summary_counters(items, processing_date)));

        let review_action = create_action(move |command: &ReviewCommand| {
            let repo = repository.get_value();
            let command = command.clone();
            async move { repo.review(&command.id, command.decision) }
        });

        create_effect(move |_| {
            apply_review_result(review_action.value().get(), toast, action_error);
        });

        Self {
            filter_state,
            records,
            load_error,
            active_tab,
            selected,
            review_action,
            action_error,
            filtered,
            counters,
        }
    }

    pub fn on_review(&self) -> Callback<ReviewCommand> {
        let review_action = self.review_action;
        let action_error = self.action_error;
        Callback::new(move |command: ReviewCommand| {
            action_error.set(None);
            review_action.dispatch(command);
        })
    }

    pub fn on_view_details(&self) -> Callback<TriageRecord> {
        let selected = self.selected;
        Callback::new(move |record: TriageRecord| selected.set(Some(record)))
    }

    pub fn review_pending(&self) -> Signal<bool> {
        self.review_action.pending().into()
    }
}

impl Default for AdminViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    match use_context::<AdminViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
