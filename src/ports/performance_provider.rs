//! PerformanceProvider port - per-subject performance analysis.

use async_trait::async_trait;

use crate::domain::context::SubjectPerformance;
use crate::domain::foundation::UserId;

use super::ProviderError;

/// Read-only port onto the platform's performance analysis service.
#[async_trait]
pub trait PerformanceProvider: Send + Sync {
    /// Returns one performance record per subject the user is tracking.
    ///
    /// An empty list is a valid answer (brand-new users).
    async fn analyze_all_subjects(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SubjectPerformance>, ProviderError>;
}
