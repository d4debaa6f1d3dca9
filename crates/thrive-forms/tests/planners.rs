use thrive_core::models::goals::{GoalRow, WeeklyGoalsPlan};
use thrive_forms::goals::{MAX_ROWS, MIN_ROWS};
use thrive_forms::{FormError, GoalPlanner, ProgressForm, WellbeingPlanner};

fn assert_numbering(rows: &[GoalRow]) {
    let numbers: Vec<u32> = rows.iter().map(|r| r.number).collect();
    let expected: Vec<u32> = (1..=rows.len() as u32).collect();
    assert_eq!(numbers, expected, "row numbers must be 1..=len with no gaps");
}

#[test]
fn numbers_stay_contiguous_through_adds_and_removes() {
    let mut planner = GoalPlanner::new();
    assert_numbering(planner.rows());

    for _ in 0..4 {
        planner.add_row().unwrap();
    }
    assert_eq!(planner.rows().len(), 5);
    assert_numbering(planner.rows());

    // Remove from the middle — everything after shifts down.
    planner.set_goal(4, "last goal").unwrap();
    planner.remove_row(1).unwrap();
    planner.remove_row(2).unwrap();
    assert_eq!(planner.rows().len(), 3);
    assert_numbering(planner.rows());
    assert_eq!(planner.rows()[2].goal, "last goal");
}

#[test]
fn row_count_is_bounded() {
    let mut planner = GoalPlanner::new();
    while planner.rows().len() < MAX_ROWS {
        planner.add_row().unwrap();
    }
    assert!(matches!(
        planner.add_row(),
        Err(FormError::RowLimit { max }) if max == MAX_ROWS
    ));

    while planner.rows().len() > MIN_ROWS {
        planner.remove_row(0).unwrap();
    }
    assert!(matches!(
        planner.remove_row(0),
        Err(FormError::MinRows { min }) if min == MIN_ROWS
    ));
}

#[test]
fn finished_plan_requires_a_goal_in_every_row() {
    let mut planner = GoalPlanner::new();
    planner.add_row().unwrap();
    planner.set_goal(0, "Walk every morning").unwrap();

    // Row 2 has no goal text yet.
    let err = planner.clone().into_plan().unwrap_err();
    assert!(matches!(err, FormError::IncompleteRow { number: 2 }));

    planner.set_goal(1, "Sleep by 11pm").unwrap();
    planner.set_how(1, "No screens after 10").unwrap();
    let plan = planner.into_plan().unwrap();
    assert_eq!(plan.rows.len(), 2);
    assert_numbering(&plan.rows);
}

#[test]
fn resumed_plan_is_renumbered() {
    // A saved plan whose numbering drifted (e.g. older client) comes back
    // contiguous.
    let plan = WeeklyGoalsPlan {
        id: Some(12),
        rows: vec![
            GoalRow { number: 3, goal: "a".into(), how: String::new(), outcome: String::new() },
            GoalRow { number: 7, goal: "b".into(), how: String::new(), outcome: String::new() },
        ],
        went_well: String::new(),
        do_differently: String::new(),
    };

    let planner = GoalPlanner::from_plan(plan);
    assert_numbering(planner.rows());
}

#[test]
fn wellbeing_rows_follow_the_same_discipline() {
    let mut planner = WellbeingPlanner::new();
    planner.add_row().unwrap();
    planner.add_row().unwrap();
    planner.remove_row(0).unwrap();

    let numbers: Vec<u32> = planner.rows().iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn progress_requires_every_goal_rated() {
    let goals = vec![
        GoalRow { number: 1, goal: "a".into(), how: String::new(), outcome: String::new() },
        GoalRow { number: 2, goal: "b".into(), how: String::new(), outcome: String::new() },
    ];

    let mut form = ProgressForm::new(&goals);
    form.set_rating(1, 4).unwrap();
    assert!(!form.is_complete());
    assert!(matches!(
        form.clone().into_submission(),
        Err(FormError::MissingRating { number: 2 })
    ));

    assert!(matches!(
        form.set_rating(2, 9),
        Err(FormError::RatingOutOfRange { value: 9, .. })
    ));

    form.set_rating(2, 3).unwrap();
    form.reflection = "Better week".to_string();
    let submission = form.into_submission().unwrap();
    assert_eq!(submission.ratings.len(), 2);
}
