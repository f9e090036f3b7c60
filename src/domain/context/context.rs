//! The read-only aggregate each generation pass runs over.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};

use crate::domain::foundation::UserId;

use super::{
    GoalSummary, LearningProfile, StudyAnalytics, StudyPreferences, StudySession,
    SubjectPerformance,
};

/// Everything the rule generators may look at, assembled once per
/// `generate` invocation and never shared across invocations.
#[derive(Debug, Clone)]
pub struct RecommendationContext {
    pub user_id: UserId,
    pub profile: LearningProfile,
    pub preferences: StudyPreferences,
    pub performance: Vec<SubjectPerformance>,
    pub analytics: StudyAnalytics,
    pub recent_sessions: Vec<StudySession>,
    pub active_goals: Vec<GoalSummary>,
    /// Instant the pass started; rules derive "now" from this.
    pub generated_at: DateTime<Utc>,
}

impl RecommendationContext {
    /// Mean performance score across all subjects, `None` when there are no
    /// performance records (brand-new users).
    pub fn average_performance(&self) -> Option<f64> {
        if self.performance.is_empty() {
            return None;
        }
        let total: f64 = self.performance.iter().map(|p| p.performance_score).sum();
        Some(total / self.performance.len() as f64)
    }

    /// The `n` most frequent session start hours in recent history.
    ///
    /// Frequency ties resolve toward the earlier hour so the result is
    /// deterministic for a given session list.
    pub fn peak_hours(&self, n: usize) -> Vec<u32> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for session in &self.recent_sessions {
            *counts.entry(session.started_at.hour()).or_insert(0) += 1;
        }
        let mut by_frequency: Vec<(u32, usize)> = counts.into_iter().collect();
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        by_frequency.into_iter().take(n).map(|(hour, _)| hour).collect()
    }

    /// Hour of day (0-23) in the user's local time at generation.
    pub fn current_hour(&self) -> u32 {
        let local = self.generated_at + chrono::Duration::hours(self.preferences.utc_offset_hours as i64);
        local.hour()
    }

    pub fn active_goal_count(&self) -> usize {
        self.active_goals.iter().filter(|g| g.is_active).count()
    }
}
