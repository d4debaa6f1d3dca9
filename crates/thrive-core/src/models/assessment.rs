use serde::{Deserialize, Serialize};

/// The screening instruments the platform administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Gad7,
    Phq9,
    RiskAssessment,
}

impl AssessmentKind {
    /// Path segment used by the question-set and submission endpoints.
    pub fn slug(&self) -> &'static str {
        match self {
            AssessmentKind::Gad7 => "gad7",
            AssessmentKind::Phq9 => "phq9",
            AssessmentKind::RiskAssessment => "risk-assessment",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AssessmentKind::Gad7 => "GAD-7 Anxiety Assessment",
            AssessmentKind::Phq9 => "PHQ-9 Depression Assessment",
            AssessmentKind::RiskAssessment => "Risk Assessment",
        }
    }
}

/// Whether a question set is the platform's generic one or the set the
/// assigned therapist configured for this patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Generic,
    Therapist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
}

/// One selectable answer. `value` is the score contribution; `label` is the
/// display text ("Not at all", "Several days", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: i32,
    pub label: String,
}

/// A server-defined `[min, max] → label` mapping used to classify a total
/// score. The client never hardcodes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityBracket {
    pub min: i32,
    pub max: i32,
    pub label: String,
}

/// A fetched question set: the ordered questions, the answer scale, and the
/// severity brackets for the resulting total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub instrument: AssessmentKind,
    pub questions: Vec<Question>,
    pub options: Vec<AnswerOption>,
    pub score_ranges: Vec<SeverityBracket>,
}

/// The server's response to a completed submission. `severity` is
/// authoritative; the client displays it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub score: i32,
    pub severity: String,
    pub tokens_awarded: u32,
}
