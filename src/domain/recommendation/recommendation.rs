//! The StudyRecommendation aggregate and its lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{ActionItemId, RecommendationId, UserId};

use super::{
    ActionItem, Category, ContextSnapshot, Impact, Priority, RecommendationMetadata,
    RecommendationType,
};

/// Invalid lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("recommendation is already dismissed")]
    AlreadyDismissed,

    #[error("recommendation is already applied")]
    AlreadyApplied,
}

/// Action-item lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionItemError {
    #[error("action item {0} not found on this recommendation")]
    NotFound(ActionItemId),
}

/// A single recommendation produced by a rule generator.
///
/// Created only during a generation pass; afterwards mutated only through
/// [`apply`](Self::apply), [`dismiss`](Self::dismiss), and
/// [`complete_action_item`](Self::complete_action_item). A terminal
/// transition force-sets `is_active` to false so active-set queries stay a
/// plain predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRecommendation {
    pub id: RecommendationId,
    pub user_id: UserId,
    pub recommendation_type: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Free-text justification shown alongside the recommendation.
    pub reasoning: String,
    pub action_items: Vec<ActionItem>,
    pub estimated_impact: Impact,
    /// Human-readable effort estimate, e.g. "2 weeks".
    pub time_to_implement: String,
    pub category: Category,
    pub context: ContextSnapshot,
    pub metadata: RecommendationMetadata,
    pub is_active: bool,
    pub is_applied: bool,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
    pub applied_at: Option<DateTime<Utc>>,
    pub dismissed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StudyRecommendation {
    /// Creates an active recommendation with medium impact and a short-term
    /// horizon; generators refine via the `with_*` builders.
    pub fn new(
        user_id: UserId,
        recommendation_type: RecommendationType,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
        reasoning: impl Into<String>,
        metadata: RecommendationMetadata,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecommendationId::new(),
            user_id,
            recommendation_type,
            priority,
            title: title.into(),
            description: description.into(),
            reasoning: reasoning.into(),
            action_items: Vec::new(),
            estimated_impact: Impact::Medium,
            time_to_implement: "varies".to_string(),
            category: Category::ShortTerm,
            context: ContextSnapshot::default(),
            metadata,
            is_active: true,
            is_applied: false,
            is_dismissed: false,
            created_at,
            applied_at: None,
            dismissed_at: None,
            expires_at: None,
        }
    }

    pub fn with_action_items(mut self, items: Vec<ActionItem>) -> Self {
        self.action_items = items;
        self
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.estimated_impact = impact;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_time_to_implement(mut self, estimate: impl Into<String>) -> Self {
        self.time_to_implement = estimate.into();
        self
    }

    pub fn with_context(mut self, snapshot: ContextSnapshot) -> Self {
        self.context = snapshot;
        self
    }

    /// Sets expiry `days` after creation. `days` must be positive, keeping
    /// `expires_at` strictly after `created_at`.
    pub fn with_expiry_days(mut self, days: u32) -> Self {
        debug_assert!(days > 0, "expiry must be strictly after creation");
        self.expires_at = Some(self.created_at + Duration::days(i64::from(days.max(1))));
        self
    }

    /// Whether the recommendation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.is_applied || self.is_dismissed
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Marks the recommendation applied.
    ///
    /// Idempotent: returns `Ok(false)` without touching `applied_at` when
    /// already applied. Applying a dismissed record is rejected.
    pub fn apply(&mut self, now: DateTime<Utc>) -> Result<bool, TransitionError> {
        if self.is_applied {
            return Ok(false);
        }
        if self.is_dismissed {
            return Err(TransitionError::AlreadyDismissed);
        }
        self.is_applied = true;
        self.applied_at = Some(now);
        self.is_active = false;
        Ok(true)
    }

    /// Marks the recommendation dismissed. Same idempotence contract as
    /// [`apply`](Self::apply).
    pub fn dismiss(&mut self, now: DateTime<Utc>) -> Result<bool, TransitionError> {
        if self.is_dismissed {
            return Ok(false);
        }
        if self.is_applied {
            return Err(TransitionError::AlreadyApplied);
        }
        self.is_dismissed = true;
        self.dismissed_at = Some(now);
        self.is_active = false;
        Ok(true)
    }

    /// Flips one action item's completion flag, leaving the others untouched.
    pub fn complete_action_item(
        &mut self,
        item_id: ActionItemId,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<(), ActionItemError> {
        let item = self
            .action_items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ActionItemError::NotFound(item_id))?;
        item.set_completed(completed, now);
        Ok(())
    }
}
