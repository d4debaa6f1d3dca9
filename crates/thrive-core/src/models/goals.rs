use serde::{Deserialize, Serialize};

/// One row of a weekly-goals plan. `number` is always the 1-based position
/// in the current list — renumbered on insert/delete, no gaps, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRow {
    pub number: u32,
    pub goal: String,
    pub how: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyGoalsPlan {
    #[serde(default)]
    pub id: Option<i64>,
    pub rows: Vec<GoalRow>,
    pub went_well: String,
    pub do_differently: String,
}

/// One row of a wellbeing plan. Same numbering discipline as [`GoalRow`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellbeingRow {
    pub number: u32,
    pub area: String,
    pub action: String,
    pub support: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellbeingPlan {
    #[serde(default)]
    pub id: Option<i64>,
    pub rows: Vec<WellbeingRow>,
    pub notes: String,
}

/// A patient's rating of one goal for the week, 0–5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRating {
    pub goal_number: u32,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub ratings: Vec<GoalRating>,
    pub reflection: String,
}
