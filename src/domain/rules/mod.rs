//! Rule generators and the prioritizer.
//!
//! Each generator is a pure function of the [`RecommendationContext`]: it
//! reads the context, never mutates it, and returns zero or more candidate
//! recommendations. Degenerate input (no subjects, no sessions) yields a
//! reduced or empty candidate set, never an error.

mod goal_adjustment;
mod habit_formation;
mod performance_focus;
mod prioritizer;
mod schedule_optimization;
mod study_method;

pub use goal_adjustment::GoalAdjustmentGenerator;
pub use habit_formation::HabitFormationGenerator;
pub use performance_focus::PerformanceFocusGenerator;
pub use prioritizer::prioritize;
pub use schedule_optimization::ScheduleOptimizationGenerator;
pub use study_method::StudyMethodGenerator;

use rand::RngCore;
use serde::Deserialize;

use crate::domain::context::RecommendationContext;
use crate::domain::recommendation::StudyRecommendation;

/// Version tag stamped into generated metadata.
pub const GENERATOR_VERSION: &str = "rules-v1";

/// One independent recommendation rule.
pub trait RuleGenerator: Send + Sync {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Emits candidate recommendations for this context.
    ///
    /// The PRNG is only consulted for template selection (motivational
    /// copy), so a seeded source makes output fully deterministic.
    fn generate(
        &self,
        ctx: &RecommendationContext,
        rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation>;
}

/// Thresholds the rules run on. Defaults mirror the platform's tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Consistency score below which a subject-focus candidate fires.
    pub consistency_threshold: f64,
    /// Weekly session count below which a study-schedule candidate fires.
    pub min_weekly_frequency: f64,
    /// Attention span assumed when the profile does not set one.
    pub default_attention_span_minutes: u32,
    /// Allowed gap between average session length and attention span.
    pub session_length_tolerance_minutes: u32,
    /// Streak length at which the habit rule stops firing.
    pub streak_target_days: u32,
    /// Mean performance score below which goal overload is considered.
    pub goal_overload_mean_score: f64,
    /// Active goal count above which goal overload is considered.
    pub max_comfortable_goals: usize,
    /// How many peak hours to compare against the current hour.
    pub peak_hour_count: usize,
    /// Days until a subject-focus recommendation expires.
    pub focus_expiry_days: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: 50.0,
            min_weekly_frequency: 2.0,
            default_attention_span_minutes: 45,
            session_length_tolerance_minutes: 15,
            streak_target_days: 7,
            goal_overload_mean_score: 60.0,
            max_comfortable_goals: 3,
            peak_hour_count: 2,
            focus_expiry_days: 14,
        }
    }
}

/// The full generator set in its default configuration order.
///
/// The engine treats generators as independent; this order only affects
/// tie-breaking among otherwise equal candidates (stable sort).
pub fn default_generators(config: &RuleConfig) -> Vec<Box<dyn RuleGenerator>> {
    vec![
        Box::new(PerformanceFocusGenerator::new(config.clone())),
        Box::new(ScheduleOptimizationGenerator::new(config.clone())),
        Box::new(StudyMethodGenerator::new()),
        Box::new(HabitFormationGenerator::new(config.clone())),
        Box::new(GoalAdjustmentGenerator::new(config.clone())),
    ]
}
