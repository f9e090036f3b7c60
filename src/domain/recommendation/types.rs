//! Closed enumerations for recommendations.
//!
//! Dispatch on recommendation kind is always over these tagged variants,
//! never over free-text tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of recommendation kinds the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    SubjectFocus,
    StudySchedule,
    StudyMethod,
    TimeManagement,
    HabitFormation,
    GoalAdjustment,
    BreakReminder,
    ReviewSession,
    DifficultyAdjustment,
    Motivation,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecommendationType::SubjectFocus => "subject_focus",
            RecommendationType::StudySchedule => "study_schedule",
            RecommendationType::StudyMethod => "study_method",
            RecommendationType::TimeManagement => "time_management",
            RecommendationType::HabitFormation => "habit_formation",
            RecommendationType::GoalAdjustment => "goal_adjustment",
            RecommendationType::BreakReminder => "break_reminder",
            RecommendationType::ReviewSession => "review_session",
            RecommendationType::DifficultyAdjustment => "difficulty_adjustment",
            RecommendationType::Motivation => "motivation",
        };
        write!(f, "{}", s)
    }
}

/// Urgency of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank for ordering; higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Estimated effect on study outcomes if the recommendation is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Numeric rank for ordering; higher is bigger impact.
    pub fn rank(&self) -> u8 {
        match self {
            Impact::High => 3,
            Impact::Medium => 2,
            Impact::Low => 1,
        }
    }
}

/// Time horizon the recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Immediate,
    ShortTerm,
    LongTerm,
    Ongoing,
}

/// What kind of step an action item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionItemKind {
    Task,
    Habit,
    Setting,
    Resource,
}
