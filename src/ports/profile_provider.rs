//! ProfileProvider port - learning profile, preferences, and goals.

use async_trait::async_trait;

use crate::domain::context::{GoalSummary, LearningProfile, StudyPreferences};
use crate::domain::foundation::UserId;

use super::ProviderError;

/// Read-only port onto the profile service.
///
/// Goals live with the user profile in the platform, so the goal summary
/// needed by the goal-adjustment rule is served here.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn get_learning_profile(&self, user_id: &UserId)
        -> Result<LearningProfile, ProviderError>;

    async fn get_study_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<StudyPreferences, ProviderError>;

    async fn get_active_goals(&self, user_id: &UserId) -> Result<Vec<GoalSummary>, ProviderError>;
}
