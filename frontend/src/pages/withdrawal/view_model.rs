use super::{repository::WithdrawalRepository, utils::WithdrawalFormState};
use crate::api::{ApiClient, ApiError, CreateWithdrawalRequest, SubmissionReceipt};
use crate::components::forms::MessageState;
use crate::state::toast::{use_toast, ToastState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct WithdrawalViewModel {
    pub form: WithdrawalFormState,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<CreateWithdrawalRequest, Result<SubmissionReceipt, ApiError>>,
}

fn apply_withdrawal_result(
    result: Option<Result<SubmissionReceipt, ApiError>>,
    form: WithdrawalFormState,
    message: RwSignal<MessageState>,
    toast: ToastState,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(receipt) => {
            toast.show(receipt.title(), receipt.message());
            message.update(|msg| msg.set_success(receipt.message()));
            form.reset();
        }
        Err(err) => {
            log::warn!("Withdrawal submission failed: {}", err);
            toast.show_error("Submission failed", err.error.clone());
            message.update(|msg| msg.set_error(err));
        }
    }
}

impl WithdrawalViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(WithdrawalRepository::new(api));
        let toast = use_toast();

        let form = WithdrawalFormState::default();
        let message = create_rw_signal(MessageState::default());

        let submit_action = create_action(move |payload: &CreateWithdrawalRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit(payload).await }
        });

        create_effect(move |_| {
            apply_withdrawal_result(submit_action.value().get(), form, message, toast);
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

impl Default for WithdrawalViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_withdrawal_view_model() -> WithdrawalViewModel {
    match use_context::<WithdrawalViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = WithdrawalViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
