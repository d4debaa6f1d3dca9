//! Therapist directory and assignment endpoints.

use thrive_core::models::booking::AvailabilitySlot;
use thrive_core::models::therapist::{Therapist, TherapistRef};
use tracing::info;

use crate::error::ApiError;
use crate::{ApiClient, Data};

impl ApiClient {
    pub async fn list_therapists(&self) -> Result<Vec<Therapist>, ApiError> {
        let body: Data<Vec<Therapist>> = self.get_json("/api/therapists").await?;
        Ok(body.data)
    }

    pub async fn get_therapist(&self, id: i64) -> Result<Therapist, ApiError> {
        self.get_json(&format!("/api/therapists/{id}")).await
    }

    /// Persist the assignment server-side. The caller writes the returned
    /// ref into the session store only after this succeeds.
    pub async fn assign_therapist(&self, id: i64) -> Result<TherapistRef, ApiError> {
        info!(therapist_id = id, "assigning therapist");
        self.post_json(&format!("/api/therapists/{id}/assign"), &serde_json::json!({}))
            .await
    }

    pub async fn therapist_availability(
        &self,
        id: i64,
    ) -> Result<Vec<AvailabilitySlot>, ApiError> {
        let body: Data<Vec<AvailabilitySlot>> = self
            .get_json(&format!("/api/therapists/{id}/availability"))
            .await?;
        Ok(body.data)
    }
}
