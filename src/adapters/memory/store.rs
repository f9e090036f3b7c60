//! In-memory recommendation store.
//!
//! Backs the store port with a `RwLock<HashMap>` for tests and the local
//! development server. Not for production: lock operations use `.expect()`
//! and will panic on poisoned locks, and mutation is last-writer-wins with
//! no durability.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{RecommendationId, UserId};
use crate::domain::recommendation::StudyRecommendation;
use crate::domain::rules::prioritize;
use crate::ports::{RecommendationFilters, RecommendationPatch, RecommendationStore, StoreError};

/// In-memory implementation of [`RecommendationStore`].
pub struct InMemoryRecommendationStore {
    records: RwLock<HashMap<RecommendationId, StudyRecommendation>>,
}

impl InMemoryRecommendationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryRecommendationStore: lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRecommendationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationStore for InMemoryRecommendationStore {
    async fn upsert(&self, recommendations: &[StudyRecommendation]) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryRecommendationStore: lock poisoned");
        for rec in recommendations {
            records.insert(rec.id, rec.clone());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: RecommendationId,
    ) -> Result<Option<StudyRecommendation>, StoreError> {
        let records = self
            .records
            .read()
            .expect("InMemoryRecommendationStore: lock poisoned");
        Ok(records.get(&id).cloned())
    }

    async fn query(
        &self,
        user_id: &UserId,
        filters: &RecommendationFilters,
    ) -> Result<Vec<StudyRecommendation>, StoreError> {
        let records = self
            .records
            .read()
            .expect("InMemoryRecommendationStore: lock poisoned");
        let matching: Vec<_> = records
            .values()
            .filter(|rec| &rec.user_id == user_id && filters.matches(rec))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; rank for a stable answer.
        Ok(prioritize(matching))
    }

    async fn update(
        &self,
        id: RecommendationId,
        patch: RecommendationPatch,
    ) -> Result<StudyRecommendation, StoreError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryRecommendationStore: lock poisoned");
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(record);
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::{
        Priority, RecommendationMetadata, RecommendationType,
    };
    use chrono::{TimeZone, Utc};

    fn record(user: &str, priority: Priority) -> StudyRecommendation {
        StudyRecommendation::new(
            UserId::new(user).unwrap(),
            RecommendationType::HabitFormation,
            priority,
            "t",
            "d",
            "r",
            RecommendationMetadata::new(0.5, "rules-v1"),
            Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn upsert_then_find_round_trips() {
        let store = InMemoryRecommendationStore::new();
        let rec = record("u1", Priority::Medium);
        store.upsert(std::slice::from_ref(&rec)).await.unwrap();

        let found = store.find_by_id(rec.id).await.unwrap().unwrap();
        assert_eq!(found.id, rec.id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_records() {
        let store = InMemoryRecommendationStore::new();
        let mut rec = record("u1", Priority::Medium);
        store.upsert(std::slice::from_ref(&rec)).await.unwrap();
        rec.title = "updated".to_string();
        store.upsert(std::slice::from_ref(&rec)).await.unwrap();

        assert_eq!(store.len(), 1);
        let found = store.find_by_id(rec.id).await.unwrap().unwrap();
        assert_eq!(found.title, "updated");
    }

    #[tokio::test]
    async fn query_scopes_to_the_user_and_ranks_results() {
        let store = InMemoryRecommendationStore::new();
        let low = record("u1", Priority::Low);
        let critical = record("u1", Priority::Critical);
        let other = record("u2", Priority::High);
        store
            .upsert(&[low.clone(), critical.clone(), other])
            .await
            .unwrap();

        let out = store
            .query(&UserId::new("u1").unwrap(), &RecommendationFilters::default())
            .await
            .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, critical.id);
        assert_eq!(out[1].id, low.id);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let store = InMemoryRecommendationStore::new();
        let result = store
            .update(RecommendationId::new(), RecommendationPatch::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
