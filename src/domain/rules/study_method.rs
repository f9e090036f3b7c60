//! Rule: visual learners should actually study visually.

use rand::RngCore;

use crate::domain::context::{LearningStyle, RecommendationContext};
use crate::domain::recommendation::{
    ActionItem, ActionItemKind, Category, Impact, Priority, RecommendationMetadata,
    RecommendationType, StudyRecommendation,
};

use super::{RuleGenerator, GENERATOR_VERSION};

/// Fires when the profile lists visual learning but the user's materials
/// show no visual methods in use.
pub struct StudyMethodGenerator;

impl StudyMethodGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StudyMethodGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleGenerator for StudyMethodGenerator {
    fn name(&self) -> &'static str {
        "study_method"
    }

    fn generate(
        &self,
        ctx: &RecommendationContext,
        _rng: &mut dyn RngCore,
    ) -> Vec<StudyRecommendation> {
        if !ctx.profile.prefers(LearningStyle::Visual) || ctx.profile.uses_visual_methods {
            return Vec::new();
        }
        let metadata = RecommendationMetadata::new(0.7, GENERATOR_VERSION)
            .with_data_points(vec!["learning_styles".to_string()])
            .with_personalization_factors(vec!["visual learner".to_string()]);
        vec![StudyRecommendation::new(
            ctx.user_id.clone(),
            RecommendationType::StudyMethod,
            Priority::Medium,
            "Lean into visual learning",
            "You learn best visually, but your current materials are mostly \
             text. Mind maps, color coding, and video explanations should stick \
             noticeably better."
                .to_string(),
            "Profile lists visual as a learning style and no visual methods are in use."
                .to_string(),
            metadata,
            ctx.generated_at,
        )
        .with_impact(Impact::Medium)
        .with_category(Category::Ongoing)
        .with_time_to_implement("ongoing")
        .with_action_items(vec![
            ActionItem::new("Draw a mind map for your current topic", ActionItemKind::Task)
                .with_estimated_minutes(25),
            ActionItem::new("Color-code your notes by theme", ActionItemKind::Habit),
            ActionItem::new("Find a video resource for this week's material", ActionItemKind::Resource)
                .with_estimated_minutes(15),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::testing;

    #[test]
    fn visual_learner_without_visual_methods_gets_candidate() {
        let mut ctx = testing::empty_context();
        ctx.profile.learning_styles = vec![LearningStyle::Visual, LearningStyle::Auditory];
        ctx.profile.uses_visual_methods = false;

        let out = StudyMethodGenerator::new().generate(&ctx, &mut testing::rng());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recommendation_type, RecommendationType::StudyMethod);
        assert_eq!(out[0].category, Category::Ongoing);
        assert_eq!(out[0].metadata.confidence, 0.7);
        assert_eq!(out[0].action_items.len(), 3);
    }

    #[test]
    fn already_using_visual_methods_is_quiet() {
        let mut ctx = testing::empty_context();
        ctx.profile.learning_styles = vec![LearningStyle::Visual];
        ctx.profile.uses_visual_methods = true;

        assert!(StudyMethodGenerator::new().generate(&ctx, &mut testing::rng()).is_empty());
    }

    #[test]
    fn non_visual_learner_is_quiet() {
        let mut ctx = testing::empty_context();
        ctx.profile.learning_styles = vec![LearningStyle::Kinesthetic];

        assert!(StudyMethodGenerator::new().generate(&ctx, &mut testing::rng()).is_empty());
    }
}
