use crate::api::{ApiClient, ApiError, CreateServiceRequest, SubmissionReceipt};
use std::rc::Rc;

#[derive(Clone)]
pub struct SubmitRequestRepository {
    client: Rc<ApiClient>,
}

impl SubmitRequestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(&self, payload: CreateServiceRequest) -> Result<SubmissionReceipt, ApiError> {
        self.client.submit_request(payload).await
    }
}
