use crate::api::{ApiClient, ApiError, CreateWithdrawalRequest, SubmissionReceipt};
use std::rc::Rc;

#[derive(Clone)]
pub struct WithdrawalRepository {
    client: Rc<ApiClient>,
}

impl WithdrawalRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(
        &self,
        payload: CreateWithdrawalRequest,
    ) -> Result<SubmissionReceipt, ApiError> {
        self.client.submit_withdrawal(payload).await
    }
}
