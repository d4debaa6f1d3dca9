//! Booking and events endpoints.

use serde::Serialize;
use thrive_core::models::booking::{Booking, EventItem, TimeSlot};
use tracing::info;

use crate::error::ApiError;
use crate::{ApiClient, Data};

#[derive(Serialize)]
struct CreateBookingBody<'a> {
    therapist_id: i64,
    slot: &'a TimeSlot,
}

impl ApiClient {
    pub async fn create_booking(
        &self,
        therapist_id: i64,
        slot: &TimeSlot,
    ) -> Result<Booking, ApiError> {
        info!(therapist_id, date = %slot.date, "creating booking");
        self.post_json(
            "/api/bookings",
            &CreateBookingBody { therapist_id, slot },
        )
        .await
    }

    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let body: Data<Vec<Booking>> = self.get_json("/api/bookings").await?;
        Ok(body.data)
    }

    pub async fn events(&self) -> Result<Vec<EventItem>, ApiError> {
        let body: Data<Vec<EventItem>> = self.get_json("/api/events").await?;
        Ok(body.data)
    }
}
