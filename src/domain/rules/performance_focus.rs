//! Rule: struggling subjects need focused consistency and frequency fixes.

use rand::RngCore;

use crate::domain::context::{RecommendationContext, SubjectPerformance, SubjectStatus};
use crate::domain::recommendation::{
    ActionItem, ActionItemKind, Category, ContextSnapshot, Impact, Priority,
    RecommendationMetadata, RecommendationType, StudyRecommendation,
};

use super::{RuleConfig, RuleGenerator, GENERATOR_VERSION};

/// Emits candidates for subjects tagged critical or needs_attention.
///
/// Low consistency fires a subject-focus candidate; low weekly frequency
/// independently fires a study-schedule candidate. One subject can produce
/// both.
pub struct PerformanceFocusGenerator {
    config: RuleConfig,
}

impl PerformanceFocusGenerator {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    fn snapshot(&self, subject: &SubjectPerformance, ctx: &RecommendationContext) -> ContextSnapshot {
        ContextSnapshot {
            subject_id: Some(subject.subject_id),
            subject_name: Some(subject.subject_name.clone()),
            current_performance: Some(subject.performance_score),
            time_of_day: Some(ctx.current_hour()),
            streak_days: Some(ctx.analytics.streak_days),
            upcoming_deadlines: Vec::new(),
        }
    }

    fn subject_focus(
        &self,
        subject: &SubjectPerformance,
        ctx: &RecommendationContext,
    ) -> StudyRecommendation {
        let priority = if subject.status == SubjectStatus::Critical {
            Priority::Critical
        } else {
            Priority::High
        };
        let category = if priority == Priority::Critical {
            Category::Immediate
        } else {
            Category::ShortTerm
        };
        let metadata = RecommendationMetadata::new(0.85, GENERATOR_VERSION)
            .with_data_points(vec![
                "consistency_score".to_string(),
                "subject_status".to_string(),
            ])
            .with_personalization_factors(vec![subject.subject_name.clone()]);
        StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::SubjectFocus,
            priority,
            format!("Focus on {}", subject.subject_name),
            format!(
                "Your consistency in {} has slipped. A short session every day \
                 rebuilds momentum faster than occasional long ones.",
                subject.subject_name
            ),
            format!(
                "Consistency score {:.0} is below the {:.0} target and the subject \
                 is flagged for attention.",
                subject.consistency_score, self.config.consistency_threshold
            ),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::High)
        .with_category(category)
        .with_time_to_implement("2 weeks")
        .with_context(self.snapshot(subject, ctx))
        .with_action_items(vec![
            ActionItem::new(
                format!("Schedule a daily 30-minute {} session", subject.subject_name),
                ActionItemKind::Task,
            )
            .with_estimated_minutes(30),
            ActionItem::new(
                format!("Set a reminder for {} study time", subject.subject_name),
                ActionItemKind::Setting,
            )
            .with_estimated_minutes(5),
            ActionItem::new(
                format!("Gather fresh practice material for {}", subject.subject_name),
                ActionItemKind::Resource,
            )
            .with_estimated_minutes(20),
        ])
        .with_expiry_days(self.config.focus_expiry_days)
    }

    fn study_schedule(
        &self,
        subject: &SubjectPerformance,
        ctx: &RecommendationContext,
    ) -> StudyRecommendation {
        let metadata = RecommendationMetadata::new(0.9, GENERATOR_VERSION)
            .with_data_points(vec!["study_frequency".to_string()])
            .with_personalization_factors(vec![subject.subject_name.clone()]);
        StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::StudySchedule,
            Priority::High,
            format!("Study {} more often", subject.subject_name),
            format!(
                "You are averaging {:.1} sessions per week in {}. Two or more \
                 spaced sessions hold material much better.",
                subject.study_frequency, subject.subject_name
            ),
            format!(
                "Study frequency {:.1}/week is below the {:.0}/week minimum.",
                subject.study_frequency, self.config.min_weekly_frequency
            ),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::Medium)
        .with_time_to_implement("1 week")
        .with_context(self.snapshot(subject, ctx))
        .with_action_items(vec![
            ActionItem::new(
                format!("Block two weekly study slots for {}", subject.subject_name),
                ActionItemKind::Task,
            )
            .with_estimated_minutes(10),
            ActionItem::new("Enable weekly schedule reminders", ActionItemKind::Setting)
                .with_estimated_minutes(5),
        ])
    }
}

impl RuleGenerator for PerformanceFocusGenerator {
    fn name(&self) -> &'static str {
        "performance_focus"
    }

    fn generate(
        &self,
        ctx: &RecommendationContext,
        _rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation> {
        let mut candidates = Vec::new();
        for subject in &ctx.performance {
            if !subject.status.needs_intervention() {
                continue;
            }
            if subject.consistency_score < self.config.consistency_threshold {
                candidates.push(self.subject_focus(subject, ctx));
            }
            if subject.study_frequency < self.config.min_weekly_frequency {
                candidates.push(self.study_schedule(subject, ctx));
            }
        }
        candidates
    }
}
