//! Weekly-goals CRUD, weekly-progress submission, and wellbeing-plan
//! submission.

use thrive_core::models::goals::{WeeklyGoalsPlan, WeeklyProgress, WellbeingPlan};

use crate::error::ApiError;
use crate::{ApiClient, Data, MessageResponse};

impl ApiClient {
    pub async fn weekly_goals(&self) -> Result<Vec<WeeklyGoalsPlan>, ApiError> {
        let body: Data<Vec<WeeklyGoalsPlan>> = self.get_json("/api/weekly-goals").await?;
        Ok(body.data)
    }

    pub async fn create_weekly_goals(
        &self,
        plan: &WeeklyGoalsPlan,
    ) -> Result<WeeklyGoalsPlan, ApiError> {
        self.post_json("/api/weekly-goals", plan).await
    }

    pub async fn update_weekly_goals(
        &self,
        id: i64,
        plan: &WeeklyGoalsPlan,
    ) -> Result<WeeklyGoalsPlan, ApiError> {
        self.put_json(&format!("/api/weekly-goals/{id}"), plan).await
    }

    pub async fn delete_weekly_goals(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/api/weekly-goals/{id}")).await
    }

    pub async fn submit_weekly_progress(
        &self,
        progress: &WeeklyProgress,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/api/weekly-progress", progress).await
    }

    pub async fn submit_wellbeing_plan(
        &self,
        plan: &WellbeingPlan,
    ) -> Result<WellbeingPlan, ApiError> {
        self.post_json("/api/wellbeing-forms", plan).await
    }
}
