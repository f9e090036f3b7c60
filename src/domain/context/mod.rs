//! Provider-supplied data shapes and the per-pass generation context.

mod activity;
mod context;
mod performance;
mod profile;

pub use activity::{StudyAnalytics, StudySession};
pub use context::RecommendationContext;
pub use performance::{SubjectPerformance, SubjectStatus};
pub use profile::{GoalSummary, LearningProfile, LearningStyle, StudyPreferences};
