use std::time::Duration;
use uuid::Uuid;

use crate::{api::types::*, config};

/// Stand-in for a submission backend: waits a fixed delay and always accepts.
/// Nothing leaves the browser.
#[derive(Clone, Debug)]
pub struct ApiClient {
    delay: Duration,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_delay(config::current().submit_delay)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn submit_request(
        &self,
        payload: CreateServiceRequest,
    ) -> Result<SubmissionReceipt, ApiError> {
        log::info!(
            "Submitting {} request ({} priority) for {}",
            payload.request_type,
            payload.priority,
            payload.department
        );
        self.round_trip().await;
        let receipt = SubmissionReceipt::new(RecordKind::Request, confirmation_suffix());
        log::info!("Request accepted as {}", receipt.id);
        Ok(receipt)
    }

    pub async fn submit_withdrawal(
        &self,
        payload: CreateWithdrawalRequest,
    ) -> Result<SubmissionReceipt, ApiError> {
        log::info!(
            "Submitting {} withdrawal for employee {}",
            payload.withdrawal_type,
            payload.employee_id
        );
        self.round_trip().await;
        let receipt = SubmissionReceipt::new(RecordKind::Withdrawal, confirmation_suffix());
        log::info!("Withdrawal accepted as {}", receipt.id);
        Ok(receipt)
    }

    async fn round_trip(&self) {
        if self.delay.is_zero() {
            return;
        }
        sleep(self.delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Random suffix in `0..1000`; neither unique nor monotonic.
pub fn confirmation_suffix() -> u16 {
    (Uuid::new_v4().as_u128() % 1000) as u16
}
