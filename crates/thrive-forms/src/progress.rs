use thrive_core::models::goals::{GoalRating, GoalRow, WeeklyProgress};

use crate::error::FormError;

const MAX_RATING: u8 = 5;

/// The weekly check-in: one 0–5 rating per active goal plus a free-text
/// reflection. Submission is gated on every goal being rated.
#[derive(Debug, Clone)]
pub struct ProgressForm {
    ratings: Vec<(u32, Option<u8>)>,
    pub reflection: String,
}

impl ProgressForm {
    pub fn new(goals: &[GoalRow]) -> Self {
        Self {
            ratings: goals.iter().map(|g| (g.number, None)).collect(),
            reflection: String::new(),
        }
    }

    pub fn set_rating(&mut self, goal_number: u32, rating: u8) -> Result<(), FormError> {
        if rating > MAX_RATING {
            return Err(FormError::RatingOutOfRange {
                value: rating,
                max: MAX_RATING,
            });
        }
        match self.ratings.iter_mut().find(|(n, _)| *n == goal_number) {
            Some((_, slot)) => {
                *slot = Some(rating);
                Ok(())
            }
            None => Err(FormError::MissingRating {
                number: goal_number,
            }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.ratings.iter().all(|(_, r)| r.is_some())
    }

    pub fn into_submission(self) -> Result<WeeklyProgress, FormError> {
        let mut ratings = Vec::with_capacity(self.ratings.len());
        for (number, rating) in &self.ratings {
            match rating {
                Some(r) => ratings.push(GoalRating {
                    goal_number: *number,
                    rating: *r,
                }),
                None => return Err(FormError::MissingRating { number: *number }),
            }
        }
        Ok(WeeklyProgress {
            ratings,
            reflection: self.reflection,
        })
    }
}
