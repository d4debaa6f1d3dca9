//! thrive-core
//!
//! Pure domain types for the Right2Thrive UK client. This is the shared
//! vocabulary of the workspace — no network dependency, no I/O.

pub mod models;
