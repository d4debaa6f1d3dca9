use thrive_core::models::assessment::{AnswerOption, Question, QuestionSet};

use crate::error::AssessmentError;

/// Result of asking the engine to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step has no answer yet; the cursor did not move.
    Blocked,
    /// Moved to the step at this index.
    Moved(usize),
    /// The last step was answered — every answer is collected and the
    /// caller should submit.
    Complete,
}

/// Drives a linear sequence of question screens. One instance per fetched
/// question set; discarded on navigation away or successful submission.
///
/// `answers[i]` stays unset until the user responds to question `i`, and
/// the only admission-control rule in the system is that a step cannot be
/// left (forward) until it holds a valid answer.
#[derive(Debug, Clone)]
pub struct StepEngine {
    questions: Vec<Question>,
    options: Vec<AnswerOption>,
    answers: Vec<Option<i32>>,
    cursor: usize,
}

impl StepEngine {
    pub fn new(set: &QuestionSet) -> Result<Self, AssessmentError> {
        if set.questions.is_empty() {
            return Err(AssessmentError::EmptyQuestionSet);
        }
        if set.options.is_empty() {
            return Err(AssessmentError::NoOptions);
        }
        Ok(Self {
            answers: vec![None; set.questions.len()],
            questions: set.questions.clone(),
            options: set.options.clone(),
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the step currently on screen.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Record an answer for a step. Values outside the instrument's declared
    /// option scale (and out-of-range step indices) are ignored rather than
    /// stored.
    pub fn set_answer(&mut self, step: usize, value: i32) {
        if step >= self.answers.len() {
            return;
        }
        if !self.options.iter().any(|o| o.value == value) {
            return;
        }
        self.answers[step] = Some(value);
    }

    pub fn answer(&self, step: usize) -> Option<i32> {
        self.answers.get(step).copied().flatten()
    }

    /// True iff step `step` holds an answer. The Next/Submit control is
    /// disabled while this is false for the current step.
    pub fn can_advance(&self, step: usize) -> bool {
        self.answer(step).is_some()
    }

    /// Move forward one step, or report completion from the last step.
    /// A no-op while the current step is unanswered.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance(self.cursor) {
            return Advance::Blocked;
        }
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            Advance::Moved(self.cursor)
        } else {
            Advance::Complete
        }
    }

    /// Move back one step. Always allowed; never clears answers.
    pub fn back(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// The collected answer vector, or how many steps are still unanswered.
    pub fn answers(&self) -> Result<Vec<i32>, AssessmentError> {
        let missing = self.answers.iter().filter(|a| a.is_none()).count();
        if missing > 0 {
            return Err(AssessmentError::Incomplete { missing });
        }
        Ok(self.answers.iter().map(|a| a.unwrap_or_default()).collect())
    }

    /// Client-side total, for display continuity only — the authoritative
    /// score comes back from the server on submission.
    pub fn local_score(&self) -> Option<i32> {
        if !self.is_complete() {
            return None;
        }
        Some(self.answers.iter().flatten().sum())
    }
}
