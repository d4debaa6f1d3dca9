use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: jiff::civil::Date,
    pub start: jiff::civil::Time,
    pub end: jiff::civil::Time,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: jiff::civil::Date,
    pub start: jiff::civil::Time,
    pub end: jiff::civil::Time,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub therapist_id: i64,
    pub slot: TimeSlot,
    pub status: BookingStatus,
    pub created_at: jiff::Timestamp,
}

/// A community event listed on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventItem {
    pub id: i64,
    pub title: String,
    pub starts_at: jiff::Timestamp,
    pub location: String,
    pub url: Option<String>,
}
