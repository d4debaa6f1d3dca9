use thrive_core::models::goals::{WellbeingPlan, WellbeingRow};

use crate::error::FormError;
use crate::goals::{MAX_ROWS, MIN_ROWS};

/// Editor for the wellbeing plan. Same row discipline as the goal planner,
/// over `{ area, action, support }`.
#[derive(Debug, Clone)]
pub struct WellbeingPlanner {
    rows: Vec<WellbeingRow>,
    pub notes: String,
    editing: Option<i64>,
}

impl WellbeingPlanner {
    pub fn new() -> Self {
        let mut planner = Self {
            rows: vec![WellbeingRow::default()],
            notes: String::new(),
            editing: None,
        };
        planner.renumber();
        planner
    }

    pub fn from_plan(plan: WellbeingPlan) -> Self {
        let mut planner = Self {
            rows: if plan.rows.is_empty() {
                vec![WellbeingRow::default()]
            } else {
                plan.rows
            },
            notes: plan.notes,
            editing: plan.id,
        };
        planner.renumber();
        planner
    }

    pub fn rows(&self) -> &[WellbeingRow] {
        &self.rows
    }

    pub fn add_row(&mut self) -> Result<usize, FormError> {
        if self.rows.len() >= MAX_ROWS {
            return Err(FormError::RowLimit { max: MAX_ROWS });
        }
        self.rows.push(WellbeingRow::default());
        self.renumber();
        Ok(self.rows.len() - 1)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.rows.len() {
            return Err(FormError::NoSuchRow { index });
        }
        if self.rows.len() <= MIN_ROWS {
            return Err(FormError::MinRows { min: MIN_ROWS });
        }
        self.rows.remove(index);
        self.renumber();
        Ok(())
    }

    pub fn set_area(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        self.row_mut(index)?.area = text.into();
        Ok(())
    }

    pub fn set_action(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        self.row_mut(index)?.action = text.into();
        Ok(())
    }

    pub fn set_support(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        self.row_mut(index)?.support = text.into();
        Ok(())
    }

    pub fn into_plan(self) -> Result<WellbeingPlan, FormError> {
        if let Some(row) = self.rows.iter().find(|r| r.area.trim().is_empty()) {
            return Err(FormError::IncompleteRow { number: row.number });
        }
        Ok(WellbeingPlan {
            id: self.editing,
            rows: self.rows,
            notes: self.notes,
        })
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut WellbeingRow, FormError> {
        self.rows
            .get_mut(index)
            .ok_or(FormError::NoSuchRow { index })
    }

    fn renumber(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.number = (i + 1) as u32;
        }
    }
}

impl Default for WellbeingPlanner {
    fn default() -> Self {
        Self::new()
    }
}
