pub mod assessment;
pub mod booking;
pub mod chat;
pub mod contact;
pub mod goals;
pub mod therapist;
pub mod user;
