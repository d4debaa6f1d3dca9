//! Assessment endpoints: question sets (generic or therapist-customized)
//! and answer submission for GAD-7, PHQ-9, and the risk assessment.

use serde::Serialize;
use thrive_core::models::assessment::{
    AssessmentKind, AssessmentOutcome, QuestionSet, QuestionSource,
};
use tracing::info;

use crate::error::ApiError;
use crate::ApiClient;

#[derive(Serialize)]
struct QuestionSetQuery {
    source: QuestionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    therapist_id: Option<i64>,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
    answers: &'a [i32],
    source: QuestionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    therapist_id: Option<i64>,
}

impl ApiClient {
    /// Fetch the question set for an instrument. With
    /// [`QuestionSource::Therapist`], the server returns the set the given
    /// therapist configured — possibly empty, which the assessment layer
    /// surfaces as its own error, not a generic failure.
    pub async fn question_set(
        &self,
        kind: AssessmentKind,
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> Result<QuestionSet, ApiError> {
        self.get_json_query(
            &format!("/api/assessments/{}/questions", kind.slug()),
            &QuestionSetQuery {
                source,
                therapist_id,
            },
        )
        .await
    }

    /// Submit a complete answer vector. Scoring is authoritative
    /// server-side; the returned severity is displayed verbatim.
    pub async fn submit_assessment(
        &self,
        kind: AssessmentKind,
        answers: &[i32],
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> Result<AssessmentOutcome, ApiError> {
        info!(instrument = kind.slug(), count = answers.len(), "submitting assessment");
        self.post_json(
            &format!("/api/assessments/{}/answers", kind.slug()),
            &SubmitBody {
                answers,
                source,
                therapist_id,
            },
        )
        .await
    }
}
