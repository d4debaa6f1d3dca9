//! thrive-assessments
//!
//! The multi-step assessment engine shared by GAD-7, PHQ-9, and the risk
//! assessment: an ordered list of steps, a position cursor, per-step
//! validation gating, and answer accumulation. Question sets and severity
//! brackets are server data; the only thing this crate hardcodes is a
//! display color per severity label.

pub mod engine;
pub mod error;
pub mod load;
pub mod severity;

pub use engine::{Advance, StepEngine};
pub use error::AssessmentError;
pub use load::{load_question_set, submit, AssessmentBackend};
