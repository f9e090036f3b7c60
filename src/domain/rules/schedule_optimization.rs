//! Rule: align study times with peak hours and session length with attention span.

use rand::RngCore;

use crate::domain::context::RecommendationContext;
use crate::domain::recommendation::{
    ActionItem, ActionItemKind, Category, ContextSnapshot, Impact, Priority,
    RecommendationMetadata, RecommendationType, StudyRecommendation,
};

use super::{RuleConfig, RuleGenerator, GENERATOR_VERSION};

/// Compares the user's schedule against their own historical rhythm.
pub struct ScheduleOptimizationGenerator {
    config: RuleConfig,
}

impl ScheduleOptimizationGenerator {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    fn peak_hour_candidate(
        &self,
        ctx: &RecommendationContext,
        peaks: &[u32],
    ) -> StudyRecommendation {
        let windows = peaks
            .iter()
            .map(|h| format!("{:02}:00", h))
            .collect::<Vec<_>>()
            .join(" and ");
        let metadata = RecommendationMetadata::new(0.75, GENERATOR_VERSION)
            .with_data_points(vec!["recent_sessions".to_string()]);
        StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::TimeManagement,
            Priority::Medium,
            "Study during your peak hours",
            format!(
                "Your focus has historically been strongest around {}. Shifting \
                 sessions toward those windows gets more out of the same time.",
                windows
            ),
            "The current hour falls outside the most frequent session start hours.".to_string(),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::Medium)
        .with_time_to_implement("3 days")
        .with_context(ContextSnapshot {
            time_of_day: Some(ctx.current_hour()),
            streak_days: Some(ctx.analytics.streak_days),
            ..ContextSnapshot::default()
        })
        .with_action_items(vec![ActionItem::new(
            format!("Move tomorrow's session to {}", windows),
            ActionItemKind::Task,
        )
        .with_estimated_minutes(5)])
    }

    fn session_length_candidate(
        &self,
        ctx: &RecommendationContext,
        average: f64,
        span: u32,
    ) -> StudyRecommendation {
        let shorten = average > f64::from(span);
        let (title, description) = if shorten {
            (
                "Shorten your study sessions",
                format!(
                    "Your sessions average {:.0} minutes but your attention span \
                     is around {} minutes. Splitting sessions with short breaks \
                     keeps the whole session productive.",
                    average, span
                ),
            )
        } else {
            (
                "Lengthen your study sessions",
                format!(
                    "Your sessions average {:.0} minutes, well under your {}-minute \
                     attention span. Slightly longer sessions reduce warm-up waste.",
                    average, span
                ),
            )
        };
        let metadata = RecommendationMetadata::new(0.8, GENERATOR_VERSION)
            .with_data_points(vec![
                "average_session_minutes".to_string(),
                "attention_span_minutes".to_string(),
            ]);
        StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::StudyMethod,
            Priority::Medium,
            title,
            description,
            format!(
                "Average session length {:.0}m differs from the {}m attention span \
                 by more than {}m.",
                average, span, self.config.session_length_tolerance_minutes
            ),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::Medium)
        .with_category(Category::Ongoing)
        .with_time_to_implement("1 week")
        .with_action_items(vec![ActionItem::new(
            format!("Set your session timer to {} minutes", span),
            ActionItemKind::Setting,
        )
        .with_estimated_minutes(2)])
    }
}

impl RuleGenerator for ScheduleOptimizationGenerator {
    fn name(&self) -> &'static str {
        "schedule_optimization"
    }

    fn generate(
        &self,
        ctx: &RecommendationContext,
        _rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation> {
        let mut candidates = Vec::new();

        let peaks = ctx.peak_hours(self.config.peak_hour_count);
        if !peaks.is_empty() && !peaks.contains(&ctx.current_hour()) {
            candidates.push(self.peak_hour_candidate(ctx, &peaks));
        }

        // Session-length comparison needs at least one recorded session.
        if ctx.analytics.total_sessions > 0 {
            let span = ctx
                .profile
                .attention_span_minutes
                .unwrap_or(self.config.default_attention_span_minutes);
            let average = ctx.analytics.average_session_minutes;
            let gap = (average - f64::from(span)).abs();
            if gap > f64::from(self.config.session_length_tolerance_minutes) {
                candidates.push(self.session_length_candidate(ctx, average, span));
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::StudySession;
    use crate::domain::rules::testing;
    use chrono::{TimeZone, Utc};

    fn generator() -> ScheduleOptimizationGenerator {
        ScheduleOptimizationGenerator::new(RuleConfig::default())
    }

    fn session_at(day: u32, hour: u32) -> StudySession {
        StudySession::new(Utc.with_ymd_and_hms(2025, 2, day, hour, 0, 0).unwrap(), 30)
    }

    #[test]
    fn off_peak_hour_emits_time_management() {
        let mut ctx = testing::empty_context(); // generated at 14:00 UTC
        ctx.recent_sessions = vec![
            session_at(1, 9),
            session_at(2, 9),
            session_at(3, 20),
            session_at(4, 20),
        ];

        let out = generator().generate(&ctx, &mut testing::rng());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recommendation_type, RecommendationType::TimeManagement);
        assert_eq!(out[0].priority, Priority::Medium);
        assert_eq!(out[0].metadata.confidence, 0.75);
    }

    #[test]
    fn studying_in_a_peak_hour_suppresses_time_management() {
        let mut ctx = testing::empty_context();
        ctx.recent_sessions = vec![session_at(1, 14), session_at(2, 14), session_at(3, 9)];

        let out = generator().generate(&ctx, &mut testing::rng());
        assert!(out.is_empty());
    }

    #[test]
    fn long_sessions_emit_shorten_advice() {
        let mut ctx = testing::empty_context();
        ctx.recent_sessions = vec![session_at(1, 14)];
        ctx.analytics.total_sessions = 10;
        ctx.analytics.average_session_minutes = 90.0;
        ctx.profile.attention_span_minutes = Some(45);

        let out = generator().generate(&ctx, &mut testing::rng());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recommendation_type, RecommendationType::StudyMethod);
        assert!(out[0].title.starts_with("Shorten"));
        assert_eq!(out[0].metadata.confidence, 0.8);
    }

    #[test]
    fn short_sessions_emit_lengthen_advice_with_default_span() {
        let mut ctx = testing::empty_context();
        ctx.recent_sessions = vec![session_at(1, 14)];
        ctx.analytics.total_sessions = 5;
        ctx.analytics.average_session_minutes = 20.0;

        let out = generator().generate(&ctx, &mut testing::rng());

        assert_eq!(out.len(), 1);
        assert!(out[0].title.starts_with("Lengthen"));
    }

    #[test]
    fn session_length_within_tolerance_is_quiet() {
        let mut ctx = testing::empty_context();
        ctx.recent_sessions = vec![session_at(1, 14)];
        ctx.analytics.total_sessions = 5;
        ctx.analytics.average_session_minutes = 50.0;

        assert!(generator().generate(&ctx, &mut testing::rng()).is_empty());
    }

    #[test]
    fn no_sessions_at_all_is_quiet() {
        let ctx = testing::empty_context();
        assert!(generator().generate(&ctx, &mut testing::rng()).is_empty());
    }
}
