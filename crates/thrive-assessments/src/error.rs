use thiserror::Error;
use thrive_api::ApiError;

#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The therapist-customized set exists but holds zero questions. This is
    /// an actionable configuration state, never folded into a generic
    /// failure.
    #[error("your therapist has not set up any questions yet — please contact them to continue")]
    NoTherapistQuestions,

    #[error("the question set is empty")]
    EmptyQuestionSet,

    #[error("the question set has no answer options")]
    NoOptions,

    #[error("no therapist assigned")]
    NoTherapistAssigned,

    #[error("assessment has not been started")]
    NotStarted,

    #[error("{missing} question(s) still unanswered")]
    Incomplete { missing: usize },

    #[error(transparent)]
    Api(#[from] ApiError),
}
