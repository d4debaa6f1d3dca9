use serde::{Deserialize, Serialize};

/// A conversation between a patient and their assigned therapist, created
/// server-side by the get-or-create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub patient_id: i64,
    pub therapist_id: i64,
    pub created_at: jiff::Timestamp,
}

/// A single chat message. Identity is the server-assigned `id`; the display
/// list must never hold two entries with the same id, even when a message
/// arrives both as a send response and as a broadcast echo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub message: String,
    pub sender: Sender,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Patient,
    Therapist,
}
