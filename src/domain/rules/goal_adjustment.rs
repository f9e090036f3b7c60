//! Rule: too many goals on weak performance means spread too thin.

use rand::RngCore;

use crate::domain::context::RecommendationContext;
use crate::domain::recommendation::{
    ActionItem, ActionItemKind, Category, Impact, Priority, RecommendationMetadata,
    RecommendationType, StudyRecommendation,
};

use super::{RuleConfig, RuleGenerator, GENERATOR_VERSION};

/// Fires when mean performance is weak while many goals are active.
pub struct GoalAdjustmentGenerator {
    config: RuleConfig,
}

impl GoalAdjustmentGenerator {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }
}

impl RuleGenerator for GoalAdjustmentGenerator {
    fn name(&self) -> &'static str {
        "goal_adjustment"
    }

    fn generate(
        &self,
        ctx: &RecommendationContext,
        _rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation> {
        let Some(average) = ctx.average_performance() else {
            return Vec::new();
        };
        let goal_count = ctx.active_goal_count();
        if average >= self.config.goal_overload_mean_score
            || goal_count <= self.config.max_comfortable_goals
        {
            return Vec::new();
        }
        let metadata = RecommendationMetadata::new(0.8, GENERATOR_VERSION)
            .with_data_points(vec![
                "average_performance".to_string(),
                "active_goal_count".to_string(),
            ]);
        vec![StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::GoalAdjustment,
            Priority::High,
            "Reduce your active goals",
            format!(
                "You are juggling {} goals while your average score sits at \
                 {:.0}. Concentrating on your top two until scores recover will \
                 move them faster than splitting attention.",
                goal_count, average
            ),
            format!(
                "Mean performance {:.0} is below {:.0} with {} active goals (limit {}).",
                average,
                self.config.goal_overload_mean_score,
                goal_count,
                self.config.max_comfortable_goals
            ),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::High)
        .with_category(Category::Immediate)
        .with_time_to_implement("1 day")
        .with_action_items(vec![
            ActionItem::new("Pick your two highest-priority goals", ActionItemKind::Task)
                .with_estimated_minutes(10),
            ActionItem::new("Pause the remaining goals", ActionItemKind::Setting)
                .with_estimated_minutes(5),
        ])]
    }
}
