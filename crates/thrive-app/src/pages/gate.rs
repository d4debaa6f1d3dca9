use thrive_core::models::therapist::TherapistRef;
use thrive_session::SessionSnapshot;

/// Copy shown by every gated page. One message everywhere, so users get a
/// consistent next step.
pub const NO_COACH_MESSAGE: &str =
    "You don't have a coach assigned yet. Choose a therapist from the directory, \
     or contact support if you believe this is a mistake.";

/// Whether the session has a counselor to work with.
#[derive(Debug, Clone)]
pub enum TherapistGate {
    Assigned(TherapistRef),
    /// Terminal for the page that sees it. Not retried, not an error.
    NoCoach,
}

/// Read the cached assignment. Never touches the network.
pub fn therapist_gate(snapshot: &SessionSnapshot) -> TherapistGate {
    match &snapshot.therapist {
        Some(therapist) => TherapistGate::Assigned(therapist.clone()),
        None => TherapistGate::NoCoach,
    }
}
