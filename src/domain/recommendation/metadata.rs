//! Generation metadata and the context snapshot embedded in a recommendation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SubjectId;

/// How and from what data a recommendation was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMetadata {
    /// Generator confidence in [0, 1]. Always computed, never left unset.
    pub confidence: f64,
    /// Names of the data points that fed the rule.
    pub data_points: Vec<String>,
    /// Version tag of the generator set that produced this record.
    pub generated_by: String,
    /// Profile facts the rule personalized on.
    pub personalization_factors: Vec<String>,
}

impl RecommendationMetadata {
    /// Builds metadata, clamping confidence into [0, 1].
    pub fn new(confidence: f64, generated_by: impl Into<String>) -> Self {
        Self {
            confidence: confidence.clamp(0.0, 1.0),
            data_points: Vec::new(),
            generated_by: generated_by.into(),
            personalization_factors: Vec::new(),
        }
    }

    pub fn with_data_points(mut self, points: Vec<String>) -> Self {
        self.data_points = points;
        self
    }

    pub fn with_personalization_factors(mut self, factors: Vec<String>) -> Self {
        self.personalization_factors = factors;
        self
    }
}

/// Slice of the generation context preserved on the record for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    pub subject_id: Option<SubjectId>,
    pub subject_name: Option<String>,
    pub current_performance: Option<f64>,
    /// Local hour of day at generation.
    pub time_of_day: Option<u32>,
    pub streak_days: Option<u32>,
    pub upcoming_deadlines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped_into_unit_interval() {
        assert_eq!(RecommendationMetadata::new(1.7, "rules-v1").confidence, 1.0);
        assert_eq!(RecommendationMetadata::new(-0.2, "rules-v1").confidence, 0.0);
        assert_eq!(RecommendationMetadata::new(0.85, "rules-v1").confidence, 0.85);
    }
}
