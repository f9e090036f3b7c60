//! Concrete steps attached to a recommendation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ActionItemId;

use super::ActionItemKind;

/// One concrete step the user can check off.
///
/// Invariant: `completed_at` is `Some` iff `is_completed` is true. All
/// mutation goes through [`ActionItem::set_completed`] to keep that holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: ActionItemId,
    pub description: String,
    pub kind: ActionItemKind,
    pub estimated_minutes: Option<u32>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ActionItem {
    pub fn new(description: impl Into<String>, kind: ActionItemKind) -> Self {
        Self {
            id: ActionItemId::new(),
            description: description.into(),
            kind,
            estimated_minutes: None,
            is_completed: false,
            completed_at: None,
        }
    }

    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Sets or clears the completion flag, keeping the timestamp invariant.
    ///
    /// Completing an already-completed item keeps the original timestamp.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        if completed {
            if !self.is_completed {
                self.is_completed = true;
                self.completed_at = Some(now);
            }
        } else {
            self.is_completed = false;
            self.completed_at = None;
        }
    }
}
