//! RecommendationStore port - persistence for recommendation records.
//!
//! The physical store is external to the core; anything with key-value
//! filter/update semantics satisfies this contract. Concurrent mutation of
//! the same record is last-writer-wins; the core relies on the caller to
//! serialize interactions with a single recommendation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::foundation::{RecommendationId, SubjectId, UserId};
use crate::domain::recommendation::{
    ActionItem, Category, Priority, RecommendationType, StudyRecommendation,
};

/// Errors from the recommendation store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("recommendation {0} not found")]
    NotFound(RecommendationId),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Optional narrowing criteria for active-set queries.
///
/// Unset fields match everything; the default filter matches all records.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilters {
    pub recommendation_type: Option<RecommendationType>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub subject_id: Option<SubjectId>,
}

impl RecommendationFilters {
    /// Whether a record satisfies every set criterion.
    pub fn matches(&self, rec: &StudyRecommendation) -> bool {
        if let Some(kind) = self.recommendation_type {
            if rec.recommendation_type != kind {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if rec.priority != priority {
                return false;
            }
        }
        if let Some(category) = self.category {
            if rec.category != category {
                return false;
            }
        }
        if let Some(subject_id) = self.subject_id {
            if rec.context.subject_id != Some(subject_id) {
                return false;
            }
        }
        true
    }
}

/// Partial update applied to a stored recommendation. Unset fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct RecommendationPatch {
    pub is_active: Option<bool>,
    pub is_applied: Option<bool>,
    pub applied_at: Option<DateTime<Utc>>,
    pub is_dismissed: Option<bool>,
    pub dismissed_at: Option<DateTime<Utc>>,
    pub action_items: Option<Vec<ActionItem>>,
}

impl RecommendationPatch {
    /// Patch reflecting an applied terminal transition.
    pub fn applied(at: Option<DateTime<Utc>>) -> Self {
        Self {
            is_active: Some(false),
            is_applied: Some(true),
            applied_at: at,
            ..Self::default()
        }
    }

    /// Patch reflecting a dismissed terminal transition.
    pub fn dismissed(at: Option<DateTime<Utc>>) -> Self {
        Self {
            is_active: Some(false),
            is_dismissed: Some(true),
            dismissed_at: at,
            ..Self::default()
        }
    }

    /// Patch replacing the full action-item list.
    pub fn action_items(items: Vec<ActionItem>) -> Self {
        Self {
            action_items: Some(items),
            ..Self::default()
        }
    }

    /// Applies this patch to a record in place.
    pub fn apply_to(&self, rec: &mut StudyRecommendation) {
        if let Some(is_active) = self.is_active {
            rec.is_active = is_active;
        }
        if let Some(is_applied) = self.is_applied {
            rec.is_applied = is_applied;
        }
        if let Some(applied_at) = self.applied_at {
            rec.applied_at = Some(applied_at);
        }
        if let Some(is_dismissed) = self.is_dismissed {
            rec.is_dismissed = is_dismissed;
        }
        if let Some(dismissed_at) = self.dismissed_at {
            rec.dismissed_at = Some(dismissed_at);
        }
        if let Some(items) = &self.action_items {
            rec.action_items = items.clone();
        }
    }
}

/// Port for recommendation persistence.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Inserts or replaces the given records.
    async fn upsert(&self, recommendations: &[StudyRecommendation]) -> Result<(), StoreError>;

    /// Looks up a single record.
    async fn find_by_id(
        &self,
        id: RecommendationId,
    ) -> Result<Option<StudyRecommendation>, StoreError>;

    /// All of a user's records matching the filters, regardless of lifecycle
    /// state; callers narrow to the active set themselves.
    async fn query(
        &self,
        user_id: &UserId,
        filters: &RecommendationFilters,
    ) -> Result<Vec<StudyRecommendation>, StoreError>;

    /// Applies a partial update, returning the updated record.
    async fn update(
        &self,
        id: RecommendationId,
        patch: RecommendationPatch,
    ) -> Result<StudyRecommendation, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RecommendationMetadata;
    use chrono::TimeZone;

    fn record(kind: RecommendationType, priority: Priority) -> StudyRecommendation {
        StudyRecommendation::new(
            UserId::new("filter-test").unwrap(),
            kind,
            priority,
            "t",
            "d",
            "r",
            RecommendationMetadata::new(0.5, "rules-v1"),
            Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn default_filters_match_everything() {
        let rec = record(RecommendationType::SubjectFocus, Priority::High);
        assert!(RecommendationFilters::default().matches(&rec));
    }

    #[test]
    fn type_filter_narrows() {
        let rec = record(RecommendationType::SubjectFocus, Priority::High);
        let mut filters = RecommendationFilters::default();
        filters.recommendation_type = Some(RecommendationType::HabitFormation);
        assert!(!filters.matches(&rec));
        filters.recommendation_type = Some(RecommendationType::SubjectFocus);
        assert!(filters.matches(&rec));
    }

    #[test]
    fn subject_filter_requires_snapshot_match() {
        let rec = record(RecommendationType::SubjectFocus, Priority::High);
        let mut filters = RecommendationFilters::default();
        filters.subject_id = Some(SubjectId::new());
        assert!(!filters.matches(&rec));
    }

    #[test]
    fn patch_apply_to_updates_only_set_fields() {
        let mut rec = record(RecommendationType::SubjectFocus, Priority::High);
        let at = Utc.with_ymd_and_hms(2025, 3, 11, 9, 0, 0).unwrap();
        RecommendationPatch::applied(Some(at)).apply_to(&mut rec);
        assert!(rec.is_applied);
        assert!(!rec.is_active);
        assert_eq!(rec.applied_at, Some(at));
        assert!(!rec.is_dismissed);
        assert!(rec.dismissed_at.is_none());
    }
}
