use thrive_assessments::{load_question_set, submit, AssessmentBackend, AssessmentError, StepEngine};
use thrive_core::models::assessment::{AssessmentKind, AssessmentOutcome, QuestionSet, QuestionSource};
use thrive_session::SessionSnapshot;
use tracing::info;

/// Where the assessment page is in its flow. Mirrors what is on screen:
/// the source-selection card, the question screens, or the results card.
#[derive(Debug)]
pub enum AssessmentPhase {
    Selecting,
    Answering,
    Results(AssessmentOutcome),
}

/// Controller for one assessment page visit (GAD-7, PHQ-9, or risk
/// assessment). Discarded on navigation away; a failed submit keeps the
/// engine — and every collected answer — in place for a retry.
pub struct AssessmentPage {
    kind: AssessmentKind,
    source: QuestionSource,
    therapist_id: Option<i64>,
    phase: AssessmentPhase,
    set: Option<QuestionSet>,
    engine: Option<StepEngine>,
    /// Dismissible inline message for the last failed action.
    pub error: Option<String>,
}

impl AssessmentPage {
    pub fn open(kind: AssessmentKind, snapshot: &SessionSnapshot) -> Self {
        Self {
            kind,
            source: QuestionSource::Generic,
            therapist_id: snapshot.therapist.as_ref().map(|t| t.id),
            phase: AssessmentPhase::Selecting,
            set: None,
            engine: None,
            error: None,
        }
    }

    pub fn phase(&self) -> &AssessmentPhase {
        &self.phase
    }

    pub fn source(&self) -> QuestionSource {
        self.source
    }

    pub fn select_source(&mut self, source: QuestionSource) {
        self.source = source;
    }

    /// Whether "Start Assessment" is enabled. Choosing the therapist set
    /// with no therapist assigned keeps it disabled.
    pub fn can_start(&self) -> bool {
        match self.source {
            QuestionSource::Generic => true,
            QuestionSource::Therapist => self.therapist_id.is_some(),
        }
    }

    /// Fetch the chosen question set and move to the question screens.
    /// On any failure the page stays on the selection screen with the
    /// error rendered inline; revisiting or re-clicking retries.
    pub async fn start<B: AssessmentBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<(), AssessmentError> {
        if !self.can_start() {
            return Err(AssessmentError::NoTherapistAssigned);
        }

        match load_question_set(backend, self.kind, self.source, self.therapist_id).await {
            Ok(set) => {
                self.engine = Some(StepEngine::new(&set)?);
                self.set = Some(set);
                self.phase = AssessmentPhase::Answering;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn engine(&self) -> Option<&StepEngine> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut StepEngine> {
        self.engine.as_mut()
    }

    /// Severity brackets for the loaded set, for the results display.
    pub fn score_ranges(&self) -> &[thrive_core::models::assessment::SeverityBracket] {
        self.set.as_ref().map(|s| s.score_ranges.as_slice()).unwrap_or(&[])
    }

    /// Submit the completed engine. The server's severity is displayed
    /// verbatim; a failure keeps the page on the question screens with
    /// everything the user entered intact.
    pub async fn submit<B: AssessmentBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<(), AssessmentError> {
        let Some(engine) = self.engine.as_ref() else {
            return Err(AssessmentError::NotStarted);
        };

        match submit(backend, self.kind, engine, self.source, self.therapist_id).await {
            Ok(outcome) => {
                info!(instrument = self.kind.slug(), score = outcome.score, "results ready");
                self.phase = AssessmentPhase::Results(outcome);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
