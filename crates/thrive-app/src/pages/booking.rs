use thrive_api::{ApiClient, ApiError};
use thrive_core::models::booking::{AvailabilitySlot, Booking, TimeSlot};
use thrive_core::models::therapist::TherapistRef;
use thrive_session::SessionSnapshot;

use crate::pages::gate::{therapist_gate, TherapistGate};

pub enum BookingPageState {
    NoCoach,
    Open(BookingPage),
}

/// The booking page: availability for the assigned therapist plus the
/// user's existing bookings.
pub struct BookingPage {
    therapist: TherapistRef,
    pub slots: Vec<AvailabilitySlot>,
    pub bookings: Vec<Booking>,
}

impl BookingPage {
    /// Gate first: without a coach there is no calendar to show and no
    /// request is made.
    pub fn open(snapshot: &SessionSnapshot) -> BookingPageState {
        match therapist_gate(snapshot) {
            TherapistGate::NoCoach => BookingPageState::NoCoach,
            TherapistGate::Assigned(therapist) => BookingPageState::Open(BookingPage {
                therapist,
                slots: Vec::new(),
                bookings: Vec::new(),
            }),
        }
    }

    pub fn therapist(&self) -> &TherapistRef {
        &self.therapist
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        self.slots = api.therapist_availability(self.therapist.id).await?;
        self.bookings = api.bookings().await?;
        Ok(())
    }

    pub async fn book(&mut self, api: &ApiClient, slot: &TimeSlot) -> Result<Booking, ApiError> {
        let booking = api.create_booking(self.therapist.id, slot).await?;
        self.bookings.push(booking.clone());
        Ok(booking)
    }
}
