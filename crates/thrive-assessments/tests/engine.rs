use thrive_assessments::{Advance, StepEngine};
use thrive_core::models::assessment::{
    AnswerOption, AssessmentKind, Question, QuestionSet, SeverityBracket,
};

fn gad7_set() -> QuestionSet {
    QuestionSet {
        instrument: AssessmentKind::Gad7,
        questions: (1..=7)
            .map(|i| Question {
                id: i,
                text: format!("Question {i}"),
            })
            .collect(),
        options: vec![
            AnswerOption { value: 0, label: "Not at all".to_string() },
            AnswerOption { value: 1, label: "Several days".to_string() },
            AnswerOption { value: 2, label: "More than half the days".to_string() },
            AnswerOption { value: 3, label: "Nearly every day".to_string() },
        ],
        score_ranges: vec![
            SeverityBracket { min: 0, max: 4, label: "Minimal anxiety".to_string() },
            SeverityBracket { min: 5, max: 9, label: "Mild anxiety".to_string() },
            SeverityBracket { min: 10, max: 14, label: "Moderate anxiety".to_string() },
            SeverityBracket { min: 15, max: 21, label: "Severe anxiety".to_string() },
        ],
    }
}

#[test]
fn advance_is_blocked_until_the_step_is_answered() {
    let mut engine = StepEngine::new(&gad7_set()).unwrap();

    assert!(!engine.can_advance(0));
    assert_eq!(engine.advance(), Advance::Blocked);
    assert_eq!(engine.position(), 0);

    engine.set_answer(0, 2);
    assert!(engine.can_advance(0));
    assert_eq!(engine.advance(), Advance::Moved(1));
}

#[test]
fn out_of_scale_values_are_silently_ignored() {
    let mut engine = StepEngine::new(&gad7_set()).unwrap();

    engine.set_answer(0, 7);
    assert_eq!(engine.answer(0), None);

    engine.set_answer(0, -1);
    assert_eq!(engine.answer(0), None);

    // Out-of-range step index is also a no-op, not a panic.
    engine.set_answer(99, 1);

    engine.set_answer(0, 3);
    assert_eq!(engine.answer(0), Some(3));
}

#[test]
fn back_never_clears_answers() {
    let mut engine = StepEngine::new(&gad7_set()).unwrap();

    engine.set_answer(0, 1);
    engine.advance();
    engine.set_answer(1, 2);

    assert_eq!(engine.back(), 0);
    assert_eq!(engine.answer(0), Some(1));
    assert_eq!(engine.answer(1), Some(2));

    // Back from the first step stays put.
    assert_eq!(engine.back(), 0);
}

#[test]
fn completing_the_last_step_reports_complete() {
    let mut engine = StepEngine::new(&gad7_set()).unwrap();
    let answers = [0, 1, 2, 3, 0, 1, 2];

    for (i, v) in answers.iter().enumerate() {
        engine.set_answer(i, *v);
        let advance = engine.advance();
        if i + 1 < answers.len() {
            assert_eq!(advance, Advance::Moved(i + 1));
        } else {
            assert_eq!(advance, Advance::Complete);
        }
    }

    assert!(engine.is_complete());
    assert_eq!(engine.local_score(), Some(9));
    assert_eq!(engine.answers().unwrap(), answers);
}

#[test]
fn incomplete_engine_refuses_to_yield_answers() {
    let mut engine = StepEngine::new(&gad7_set()).unwrap();
    engine.set_answer(0, 1);

    assert!(engine.local_score().is_none());
    match engine.answers() {
        Err(thrive_assessments::AssessmentError::Incomplete { missing }) => {
            assert_eq!(missing, 6)
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}
