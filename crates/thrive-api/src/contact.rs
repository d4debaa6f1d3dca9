//! Contact-form and GDPR data-request endpoints.

use thrive_core::models::contact::{ContactRequest, DataRequest};

use crate::error::ApiError;
use crate::{ApiClient, MessageResponse};

impl ApiClient {
    pub async fn submit_contact(&self, req: &ContactRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("/api/contact", req).await
    }

    pub async fn submit_data_request(
        &self,
        req: &DataRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/api/data-requests", req).await
    }
}
