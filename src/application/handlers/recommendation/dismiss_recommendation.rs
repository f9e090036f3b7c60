//! DismissRecommendationHandler - marks a recommendation as declined.

use std::sync::Arc;

use crate::domain::foundation::{Clock, RecommendationId};
use crate::domain::recommendation::StudyRecommendation;
use crate::ports::{RecommendationPatch, RecommendationStore};

use super::LifecycleError;

/// Command to dismiss a recommendation.
#[derive(Debug, Clone, Copy)]
pub struct DismissRecommendationCommand {
    pub recommendation_id: RecommendationId,
}

pub struct DismissRecommendationHandler {
    store: Arc<dyn RecommendationStore>,
    clock: Arc<dyn Clock>,
}

impl DismissRecommendationHandler {
    pub fn new(store: Arc<dyn RecommendationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Idempotent with the same contract as apply.
    pub async fn handle(
        &self,
        command: DismissRecommendationCommand,
    ) -> Result<StudyRecommendation, LifecycleError> {
        let id = command.recommendation_id;
        let mut rec = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(LifecycleError::NotFound(id))?;

        let changed = rec.dismiss(self.clock.now())?;
        if !changed {
            return Ok(rec);
        }

        let updated = self
            .store
            .update(id, RecommendationPatch::dismissed(rec.dismissed_at))
            .await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::recommendation::testing::{sample_recommendation, SingleRecordStore};
    use crate::domain::foundation::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn dismiss_sets_flags_and_timestamp() {
        let rec = sample_recommendation();
        let id = rec.id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = DismissRecommendationHandler::new(store.clone(), clock());

        let out = handler
            .handle(DismissRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();

        assert!(out.is_dismissed);
        assert!(!out.is_active);
        assert!(out.dismissed_at.is_some());
        assert!(store.stored().unwrap().is_dismissed);
    }

    #[tokio::test]
    async fn second_dismiss_is_a_no_op() {
        let rec = sample_recommendation();
        let id = rec.id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = DismissRecommendationHandler::new(store.clone(), clock());

        handler
            .handle(DismissRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();
        handler
            .handle(DismissRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();

        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = Arc::new(SingleRecordStore::empty());
        let handler = DismissRecommendationHandler::new(store, clock());

        let result = handler
            .handle(DismissRecommendationCommand {
                recommendation_id: RecommendationId::new(),
            })
            .await;

        assert!(matches!(result, Err(LifecycleError::NotFound(_))));
    }
}
