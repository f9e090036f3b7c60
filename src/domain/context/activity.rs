//! Study-session history and aggregate analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SubjectId;

/// One completed study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub started_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub subject_id: Option<SubjectId>,
}

impl StudySession {
    pub fn new(started_at: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            started_at,
            duration_minutes,
            subject_id: None,
        }
    }

    pub fn for_subject(mut self, subject_id: SubjectId) -> Self {
        self.subject_id = Some(subject_id);
        self
    }
}

/// Aggregate study analytics computed by the activity service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAnalytics {
    /// Current consecutive-day study streak.
    pub streak_days: u32,
    /// Mean session length over the analytics window, in minutes.
    pub average_session_minutes: f64,
    pub total_sessions: u32,
    pub total_minutes: u64,
}
