use std::future::Future;
use std::pin::Pin;

use thrive_api::{ApiClient, ApiError};
use thrive_core::models::assessment::{
    AssessmentKind, AssessmentOutcome, QuestionSet, QuestionSource,
};
use tracing::info;

use crate::engine::StepEngine;
use crate::error::AssessmentError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The slice of the platform API the assessment flow needs. Methods return
/// boxed futures for dyn compatibility; tests substitute an in-memory
/// implementation.
pub trait AssessmentBackend: Send + Sync {
    fn question_set(
        &self,
        kind: AssessmentKind,
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> BoxFuture<'_, Result<QuestionSet, ApiError>>;

    fn submit<'a>(
        &'a self,
        kind: AssessmentKind,
        answers: &'a [i32],
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> BoxFuture<'a, Result<AssessmentOutcome, ApiError>>;
}

impl AssessmentBackend for ApiClient {
    fn question_set(
        &self,
        kind: AssessmentKind,
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> BoxFuture<'_, Result<QuestionSet, ApiError>> {
        Box::pin(async move { ApiClient::question_set(self, kind, source, therapist_id).await })
    }

    fn submit<'a>(
        &'a self,
        kind: AssessmentKind,
        answers: &'a [i32],
        source: QuestionSource,
        therapist_id: Option<i64>,
    ) -> BoxFuture<'a, Result<AssessmentOutcome, ApiError>> {
        Box::pin(async move {
            ApiClient::submit_assessment(self, kind, answers, source, therapist_id).await
        })
    }
}

/// Fetch and validate a question set.
///
/// A therapist-customized request with no therapist is refused before any
/// network call. A therapist set that comes back with zero questions yields
/// [`AssessmentError::NoTherapistQuestions`] — the user needs to contact the
/// therapist, not retry.
pub async fn load_question_set<B: AssessmentBackend + ?Sized>(
    backend: &B,
    kind: AssessmentKind,
    source: QuestionSource,
    therapist_id: Option<i64>,
) -> Result<QuestionSet, AssessmentError> {
    if source == QuestionSource::Therapist && therapist_id.is_none() {
        return Err(AssessmentError::NoTherapistAssigned);
    }

    let set = backend.question_set(kind, source, therapist_id).await?;

    if set.questions.is_empty() {
        return Err(match source {
            QuestionSource::Therapist => AssessmentError::NoTherapistQuestions,
            QuestionSource::Generic => AssessmentError::EmptyQuestionSet,
        });
    }

    info!(
        instrument = kind.slug(),
        questions = set.questions.len(),
        "question set loaded"
    );
    Ok(set)
}

/// Submit a completed engine. The engine is only borrowed: on failure every
/// collected answer is still in place and the user retries without
/// re-entering anything.
pub async fn submit<B: AssessmentBackend + ?Sized>(
    backend: &B,
    kind: AssessmentKind,
    engine: &StepEngine,
    source: QuestionSource,
    therapist_id: Option<i64>,
) -> Result<AssessmentOutcome, AssessmentError> {
    let answers = engine.answers()?;
    let outcome = backend
        .submit(kind, &answers, source, therapist_id)
        .await?;
    info!(
        instrument = kind.slug(),
        score = outcome.score,
        severity = %outcome.severity,
        "assessment submitted"
    );
    Ok(outcome)
}
