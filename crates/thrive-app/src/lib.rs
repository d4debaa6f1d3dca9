//! thrive-app
//!
//! Page controllers: the flows a UI shell drives, one per feature page.
//! Every page that needs a counselor checks the therapist gate before doing
//! anything else — "no coach assigned" is a terminal, user-visible state,
//! not a loading or error state, and a gated page issues no
//! therapist-scoped network request.

pub mod flows;
pub mod pages;

pub use pages::gate::{therapist_gate, TherapistGate, NO_COACH_MESSAGE};
