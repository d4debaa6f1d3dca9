pub mod assessment;
pub mod booking;
pub mod chat;
pub mod gate;
pub mod goals;
