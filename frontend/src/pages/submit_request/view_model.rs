use super::{repository::SubmitRequestRepository, utils::RequestFormState};
use crate::api::{ApiClient, ApiError, CreateServiceRequest, SubmissionReceipt};
use crate::components::forms::MessageState;
use crate::state::toast::{use_toast, ToastState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SubmitRequestViewModel {
    pub form: RequestFormState,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<CreateServiceRequest, Result<SubmissionReceipt, ApiError>>,
}

fn apply_submission_result(
    result: Option<Result<SubmissionReceipt, ApiError>>,
    form: RequestFormState,
    message: RwSignal<MessageState>,
    toast: ToastState,
) {
    match result {
        Some(Ok(receipt)) => {
            message.update(|msg| msg.set_success(receipt.message()));
            toast.show(receipt.title(), receipt.message());
            form.reset();
        }
        Some(Err(err)) => {
            toast.show_error("Submission failed", err.error.clone());
            message.update(|msg| msg.set_error(err));
        }
        None => {}
    }
}

impl SubmitRequestViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(SubmitRequestRepository::new(api));
        let toast = use_toast();

        let form = RequestFormState::default();
        let message = create_rw_signal(MessageState::default());

        let submit_action = create_action(move |payload: &CreateServiceRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit(payload).await }
        });

        create_effect(move |_| {
            apply_submission_result(submit_action.value().get(), form, message, toast);
        });

        Self {
            form,
            message,
            submit_action,
        }
    }

    pub fn submitting(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }

    /// Validates the form and dispatches it unless a submission is in flight.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.message.update(|msg| msg.clear());
        match self.form.to_payload() {
            Ok(payload) => self.submit_action.dispatch(payload),
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

impl Default for SubmitRequestViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_submit_request_view_model() -> SubmitRequestViewModel {
    match use_context::<SubmitRequestViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = SubmitRequestViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
