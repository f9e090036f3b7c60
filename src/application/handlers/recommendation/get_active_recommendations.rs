//! GetActiveRecommendationsHandler - query handler for the active set.

use std::sync::Arc;

use crate::domain::foundation::{Clock, UserId};
use crate::domain::recommendation::StudyRecommendation;
use crate::ports::{RecommendationFilters, RecommendationStore, StoreError};

/// Query for a user's active recommendations, optionally narrowed.
#[derive(Debug, Clone)]
pub struct GetActiveRecommendationsQuery {
    pub user_id: UserId,
    pub filters: RecommendationFilters,
}

impl GetActiveRecommendationsQuery {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            filters: RecommendationFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: RecommendationFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// Returns recommendations that are still actionable: active, non-terminal,
/// and not past their expiry.
pub struct GetActiveRecommendationsHandler {
    store: Arc<dyn RecommendationStore>,
    clock: Arc<dyn Clock>,
}

impl GetActiveRecommendationsHandler {
    pub fn new(store: Arc<dyn RecommendationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        query: GetActiveRecommendationsQuery,
    ) -> Result<Vec<StudyRecommendation>, StoreError> {
        let records = self.store.query(&query.user_id, &query.filters).await?;
        let now = self.clock.now();
        Ok(records
            .into_iter()
            .filter(|rec| {
                rec.is_active && !rec.is_dismissed && !rec.is_applied && !rec.is_expired(now)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::domain::foundation::{FixedClock, RecommendationId};
    use crate::domain::recommendation::{
        Priority, RecommendationMetadata, RecommendationType,
    };
    use crate::ports::RecommendationPatch;

    struct StubStore {
        records: Vec<StudyRecommendation>,
    }

    #[async_trait]
    impl RecommendationStore for StubStore {
        async fn upsert(
            &self,
            _recommendations: &[StudyRecommendation],
        ) -> Result<(), StoreError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: RecommendationId,
        ) -> Result<Option<StudyRecommendation>, StoreError> {
            Ok(None)
        }

        async fn query(
            &self,
            user_id: &UserId,
            filters: &RecommendationFilters,
        ) -> Result<Vec<StudyRecommendation>, StoreError> {
            Ok(self
                .records
                .iter()
                .filter(|r| &r.user_id == user_id && filters.matches(r))
                .cloned()
                .collect())
        }

        async fn update(
            &self,
            id: RecommendationId,
            _patch: RecommendationPatch,
        ) -> Result<StudyRecommendation, StoreError> {
            Err(StoreError::NotFound(id))
        }
    }

    fn user() -> UserId {
        UserId::new("query-test").unwrap()
    }

    fn record() -> StudyRecommendation {
        StudyRecommendation::new(
            user(),
            RecommendationType::HabitFormation,
            Priority::Medium,
            "t",
            "d",
            "r",
            RecommendationMetadata::new(0.5, "rules-v1"),
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    fn handler(records: Vec<StudyRecommendation>) -> GetActiveRecommendationsHandler {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap());
        GetActiveRecommendationsHandler::new(Arc::new(StubStore { records }), Arc::new(clock))
    }

    #[tokio::test]
    async fn dismissed_records_are_never_returned() {
        let mut dismissed = record();
        dismissed
            .dismiss(Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap())
            .unwrap();
        let active = record();

        let out = handler(vec![dismissed, active.clone()])
            .handle(GetActiveRecommendationsQuery::for_user(user()))
            .await
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, active.id);
        assert!(out.iter().all(|r| !r.is_dismissed));
    }

    #[tokio::test]
    async fn applied_records_are_filtered_out() {
        let mut applied = record();
        applied
            .apply(Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap())
            .unwrap();

        let out = handler(vec![applied])
            .handle(GetActiveRecommendationsQuery::for_user(user()))
            .await
            .unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn expired_records_are_filtered_out() {
        // Created 2025-03-01 with 5-day expiry; clock reads 2025-03-10.
        let expired = record().with_expiry_days(5);

        let out = handler(vec![expired])
            .handle(GetActiveRecommendationsQuery::for_user(user()))
            .await
            .unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn type_filter_narrows_the_result() {
        let out = handler(vec![record()])
            .handle(GetActiveRecommendationsQuery::for_user(user()).with_filters(
                RecommendationFilters {
                    recommendation_type: Some(RecommendationType::SubjectFocus),
                    ..RecommendationFilters::default()
                },
            ))
            .await
            .unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn other_users_records_are_not_returned() {
        let mut foreign = record();
        foreign.user_id = UserId::new("someone-else").unwrap();

        let out = handler(vec![foreign])
            .handle(GetActiveRecommendationsQuery::for_user(user()))
            .await
            .unwrap();

        assert!(out.is_empty());
    }
}
