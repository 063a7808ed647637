//! Roadmap operations for the Navigator.

use super::Navigator;
use crate::{
    error::{NavigatorError, Result},
    models::{GenerateOutcome, Profile, Roadmap, RoadmapStep, RoadmapSummary, StatusChange},
    params::{GenerateRoadmap, UpdateStepStatus, UserId},
    progress,
};

impl Navigator {
    /// Generates the user's roadmap from their profile.
    ///
    /// Idempotent: when the user already has a roadmap it is returned
    /// unchanged with `created == false`, and the profile is not consulted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown branch or career goal and
    /// `NoMatchingTemplate` when no active template applies to the profile.
    pub async fn generate_roadmap(&self, params: &GenerateRoadmap) -> Result<GenerateOutcome> {
        let profile = Profile::try_from(params)?;
        let user_id = params.user_id;
        self.with_database(move |db| db.generate_roadmap(user_id, &profile))
            .await
    }

    /// Retrieves the user's roadmap, if any.
    pub async fn get_roadmap(&self, params: &UserId) -> Result<Option<Roadmap>> {
        let user_id = params.user_id;
        self.with_database(move |db| db.get_roadmap(user_id)).await
    }

    /// Retrieves the user's roadmap together with freshly computed progress.
    pub async fn get_roadmap_with_progress(&self, params: &UserId) -> Result<RoadmapSummary> {
        let user_id = params.user_id;
        let roadmap = self
            .get_roadmap(params)
            .await?
            .ok_or(NavigatorError::RoadmapNotFound { user_id })?;
        Ok(progress::summarize(roadmap))
    }

    /// Changes the status of one step of the user's roadmap.
    ///
    /// `step_id` identifies the template step; the matching instance of the
    /// user's roadmap is updated. Returns the updated instance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown status string and `StepNotFound`
    /// when the user has no roadmap or the roadmap has no such step.
    pub async fn update_step_status(&self, params: &UpdateStepStatus) -> Result<RoadmapStep> {
        let change = StatusChange::try_from(params.clone())?;
        self.with_database(move |db| db.update_step_status(&change))
            .await
    }
}
