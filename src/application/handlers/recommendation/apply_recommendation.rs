//! ApplyRecommendationHandler - marks a recommendation as followed.

use std::sync::Arc;

use crate::domain::foundation::{Clock, RecommendationId};
use crate::domain::recommendation::StudyRecommendation;
use crate::ports::{RecommendationPatch, RecommendationStore};

use super::LifecycleError;

/// Command to apply a recommendation.
#[derive(Debug, Clone, Copy)]
pub struct ApplyRecommendationCommand {
    pub recommendation_id: RecommendationId,
}

pub struct ApplyRecommendationHandler {
    store: Arc<dyn RecommendationStore>,
    clock: Arc<dyn Clock>,
}

impl ApplyRecommendationHandler {
    pub fn new(store: Arc<dyn RecommendationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Idempotent: a second apply on the same id leaves the stored record
    /// untouched and returns it as-is.
    pub async fn handle(
        &self,
        command: ApplyRecommendationCommand,
    ) -> Result<StudyRecommendation, LifecycleError> {
        let id = command.recommendation_id;
        let mut rec = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(LifecycleError::NotFound(id))?;

        let changed = rec.apply(self.clock.now())?;
        if !changed {
            return Ok(rec);
        }

        let updated = self
            .store
            .update(id, RecommendationPatch::applied(rec.applied_at))
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

    fn clock_at_day(day: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn apply_sets_flags_and_timestamp() {
        let rec = sample_recommendation();
        let id = rec.id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = ApplyRecommendationHandler::new(store.clone(), clock_at_day(11));

        let out = handler
            .handle(ApplyRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();

        assert!(out.is_applied);
        assert!(!out.is_active);
        assert_eq!(
            out.applied_at,
            Some(Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap())
        );
        assert!(store.stored().unwrap().is_applied);
    }

    #[tokio::test]
    async fn second_apply_does_not_move_the_timestamp() {
        let rec = sample_recommendation();
        let id = rec.id;
        let store = Arc::new(SingleRecordStore::holding(rec));

        let first = ApplyRecommendationHandler::new(store.clone(), clock_at_day(11))
            .handle(ApplyRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();
        let second = ApplyRecommendationHandler::new(store.clone(), clock_at_day(20))
            .handle(ApplyRecommendationCommand { recommendation_id: id })
            .await
            .unwrap();

        assert_eq!(second.applied_at, first.applied_at);
        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = Arc::new(SingleRecordStore::empty());
        let handler = ApplyRecommendationHandler::new(store, clock_at_day(11));

        let result = handler
            .handle(ApplyRecommendationCommand {
                recommendation_id: RecommendationId::new(),
            })
            .await;

        assert!(matches!(result, Err(LifecycleError::NotFound(_))));
    }

    #[tokio::test]
    async fn applying_a_dismissed_recommendation_is_rejected() {
        let mut rec = sample_recommendation();
        let id = rec.id;
        rec.dismiss(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap())
            .unwrap();
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = ApplyRecommendationHandler::new(store, clock_at_day(11));

        let result = handler
            .handle(ApplyRecommendationCommand { recommendation_id: id })
            .await;

        assert!(matches!(result, Err(LifecycleError::InvalidTransition(_))));
    }
}
