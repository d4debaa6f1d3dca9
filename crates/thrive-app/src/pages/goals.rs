use thiserror::Error;
use thrive_api::{ApiClient, ApiError};
use thrive_core::models::goals::{WeeklyGoalsPlan, WellbeingPlan};
use thrive_forms::{FormError, GoalPlanner, ProgressForm, WellbeingPlanner};
use thrive_session::SessionSnapshot;

use crate::pages::gate::{therapist_gate, TherapistGate};

#[derive(Debug, Error)]
pub enum GoalsError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The weekly-goals page: planner plus saved-plan history.
pub enum GoalsPageState {
    NoCoach,
    Open(GoalsPage),
}

pub struct GoalsPage {
    pub planner: GoalPlanner,
}

impl GoalsPage {
    /// Open the page. Gated: without a coach there is nothing to plan
    /// against, and no request is made.
    pub fn open(snapshot: &SessionSnapshot) -> GoalsPageState {
        match therapist_gate(snapshot) {
            TherapistGate::NoCoach => GoalsPageState::NoCoach,
            TherapistGate::Assigned(_) => GoalsPageState::Open(GoalsPage {
                planner: GoalPlanner::new(),
            }),
        }
    }

    /// Resume the most recently saved plan, if any.
    pub async fn resume(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        if let Some(plan) = api.weekly_goals().await?.into_iter().next_back() {
            self.planner = GoalPlanner::from_plan(plan);
        }
        Ok(())
    }

    pub async fn save(&self, api: &ApiClient) -> Result<WeeklyGoalsPlan, GoalsError> {
        let plan = self.planner.clone().into_plan()?;
        let saved = match plan.id {
            Some(id) => api.update_weekly_goals(id, &plan).await?,
            None => api.create_weekly_goals(&plan).await?,
        };
        Ok(saved)
    }

    /// Start the weekly check-in for the current plan's rows.
    pub fn progress_form(&self) -> ProgressForm {
        ProgressForm::new(self.planner.rows())
    }
}

/// The wellbeing-plan page follows the same gate-then-edit shape.
pub enum WellbeingPageState {
    NoCoach,
    Open(WellbeingPage),
}

pub struct WellbeingPage {
    pub planner: WellbeingPlanner,
}

impl WellbeingPage {
    pub fn open(snapshot: &SessionSnapshot) -> WellbeingPageState {
        match therapist_gate(snapshot) {
            TherapistGate::NoCoach => WellbeingPageState::NoCoach,
            TherapistGate::Assigned(_) => WellbeingPageState::Open(WellbeingPage {
                planner: WellbeingPlanner::new(),
            }),
        }
    }

    pub async fn save(&self, api: &ApiClient) -> Result<WellbeingPlan, GoalsError> {
        let plan = self.planner.clone().into_plan()?;
        Ok(api.submit_wellbeing_plan(&plan).await?)
    }
}
