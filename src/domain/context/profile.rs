//! Learning profile, study preferences, and goal summaries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::GoalId;

/// Self-reported learning style tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

/// The user's learning profile as maintained by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
    pub learning_styles: Vec<LearningStyle>,
    /// Self-assessed sustained attention span, if the user has set one.
    pub attention_span_minutes: Option<u32>,
    /// Hours of the day (0-23) the user says they prefer to study.
    pub preferred_hours: Vec<u32>,
    /// Whether the user already studies with visual methods (mind maps,
    /// color-coded notes). Derived externally from their material usage.
    pub uses_visual_methods: bool,
}

impl LearningProfile {
    pub fn prefers(&self, style: LearningStyle) -> bool {
        self.learning_styles.contains(&style)
    }
}

impl Default for LearningProfile {
    fn default() -> Self {
        Self {
            learning_styles: Vec::new(),
            attention_span_minutes: None,
            preferred_hours: Vec::new(),
            uses_visual_methods: false,
        }
    }
}

/// Study-preference settings from the settings surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPreferences {
    pub daily_goal_minutes: u32,
    pub reminders_enabled: bool,
    /// Offset from UTC in whole hours, used to localize time-of-day copy.
    pub utc_offset_hours: i32,
}

impl Default for StudyPreferences {
    fn default() -> Self {
        Self {
            daily_goal_minutes: 60,
            reminders_enabled: true,
            utc_offset_hours: 0,
        }
    }
}

/// Minimal view of a study goal, enough for the goal-adjustment rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub id: GoalId,
    pub title: String,
    pub is_active: bool,
}

impl GoalSummary {
    pub fn active(title: impl Into<String>) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            is_active: true,
        }
    }
}
