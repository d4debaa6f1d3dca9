//! thrive-session
//!
//! The browser-session analog: a persistent store for identity and
//! therapist-assignment facts (token, user, assigned therapist, pending
//! verification email). Every feature reads it; only the enumerated writer
//! methods — login, logout, assign-therapist, profile update, pending
//! verification — may change it. Writes persist atomically before the
//! change notification fires.

pub mod error;
pub mod store;

pub use error::SessionError;
pub use store::{SessionSnapshot, SessionStore};
