//! ActivityProvider port - session history and aggregate analytics.

use async_trait::async_trait;

use crate::domain::context::{StudyAnalytics, StudySession};
use crate::domain::foundation::UserId;

use super::ProviderError;

/// Read-only port onto the activity-tracking service.
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Sessions started within the last `days` days, most recent last.
    async fn get_recent_sessions(
        &self,
        user_id: &UserId,
        days: u32,
    ) -> Result<Vec<StudySession>, ProviderError>;

    async fn get_study_analytics(&self, user_id: &UserId)
        -> Result<StudyAnalytics, ProviderError>;
}
