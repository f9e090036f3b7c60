//! Rule: short streaks get baseline habit guidance.

use rand::{Rng, RngCore};

use crate::domain::context::RecommendationContext;
use crate::domain::recommendation::{
    ActionItem, ActionItemKind, Category, ContextSnapshot, Impact, Priority,
    RecommendationMetadata, RecommendationType, StudyRecommendation,
};

use super::{RuleConfig, RuleGenerator, GENERATOR_VERSION};

/// Motivational openers, one chosen per pass through the injected PRNG.
const OPENERS: [&str; 4] = [
    "Small daily wins beat heroic weekends.",
    "Consistency is the quietest superpower.",
    "A streak is just one good day, repeated.",
    "Fifteen focused minutes today is a vote for tomorrow.",
];

/// Fires whenever the study streak is below target, including for brand-new
/// users with no performance records at all.
pub struct HabitFormationGenerator {
    config: RuleConfig,
}

impl HabitFormationGenerator {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }
}

impl RuleGenerator for HabitFormationGenerator {
    fn name(&self) -> &'static str {
        "habit_formation"
    }

    fn generate(
        &self,
        ctx: &RecommendationContext,
        rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation> {
        if ctx.analytics.streak_days >= self.config.streak_target_days {
            return Vec::new();
        }
        let opener = OPENERS[rng.gen_range(0..OPENERS.len())];
        let metadata = RecommendationMetadata::new(0.85, GENERATOR_VERSION)
            .with_data_points(vec!["streak_days".to_string()]);
        vec![StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::HabitFormation,
            Priority::Medium,
            "Build a daily study habit",
            format!(
                "{} Your current streak is {} days; a steady daily minimum will \
                 carry you past the {}-day mark where habits start to hold.",
                opener, ctx.analytics.streak_days, self.config.streak_target_days
            ),
            format!(
                "Streak of {} days is below the {}-day habit target.",
                ctx.analytics.streak_days, self.config.streak_target_days
            ),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::High)
        .with_category(Category::LongTerm)
        .with_time_to_implement("3 weeks")
        .with_context(ContextSnapshot {
            streak_days: Some(ctx.analytics.streak_days),
            time_of_day: Some(ctx.current_hour()),
            ..ContextSnapshot::default()
        })
        .with_action_items(vec![
            ActionItem::new("Study at least 15 minutes every day", ActionItemKind::Habit)
                .with_estimated_minutes(15),
            ActionItem::new("Turn on a daily study reminder", ActionItemKind::Setting)
                .with_estimated_minutes(5),
            ActionItem::new("Track your streak on the dashboard", ActionItemKind::Habit),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::testing;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn generator() -> HabitFormationGenerator {
        HabitFormationGenerator::new(RuleConfig::default())
    }

    #[test]
    fn fires_for_brand_new_user_with_no_data() {
        let ctx = testing::empty_context();
        let out = generator().generate(&ctx, &mut testing::rng());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recommendation_type, RecommendationType::HabitFormation);
        assert_eq!(out[0].priority, Priority::Medium);
        assert_eq!(out[0].category, Category::LongTerm);
        assert_eq!(out[0].metadata.confidence, 0.85);
        assert_eq!(out[0].action_items.len(), 3);
    }

    #[test]
    fn quiet_once_streak_reaches_target() {
        let mut ctx = testing::empty_context();
        ctx.analytics.streak_days = 7;
        assert!(generator().generate(&ctx, &mut testing::rng()).is_empty());
    }

    #[test]
    fn same_seed_selects_same_opener() {
        let ctx = testing::empty_context();
        let a = generator().generate(&ctx, &mut Pcg64::seed_from_u64(42));
        let b = generator().generate(&ctx, &mut Pcg64::seed_from_u64(42));
        assert_eq!(a[0].description, b[0].description);
    }

    #[test]
    fn description_embeds_a_known_opener() {
        let ctx = testing::empty_context();
        let out = generator().generate(&ctx, &mut testing::rng());
        assert!(OPENERS.iter().any(|o| out[0].description.starts_with(o)));
    }
}
