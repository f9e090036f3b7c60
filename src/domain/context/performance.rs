//! Per-subject performance data supplied by the performance provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubjectId, ValidationError};

/// Externally derived health tag for a subject. Trusted as-is by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectStatus {
    Critical,
    NeedsAttention,
    Good,
}

impl SubjectStatus {
    /// Statuses that warrant a focus recommendation.
    pub fn needs_intervention(&self) -> bool {
        matches!(self, SubjectStatus::Critical | SubjectStatus::NeedsAttention)
    }
}

/// Performance snapshot for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformance {
    pub subject_id: SubjectId,
    pub subject_name: String,
    /// Overall performance score in [0, 100].
    pub performance_score: f64,
    /// Consistency score in [0, 100].
    pub consistency_score: f64,
    /// Average study sessions per week.
    pub study_frequency: f64,
    pub status: SubjectStatus,
    pub last_studied_at: Option<DateTime<Utc>>,
}

impl SubjectPerformance {
    /// Creates a performance record, validating the score ranges.
    pub fn new(
        subject_id: SubjectId,
        subject_name: impl Into<String>,
        performance_score: f64,
        consistency_score: f64,
        study_frequency: f64,
        status: SubjectStatus,
    ) -> Result<Self, ValidationError> {
        let subject_name = subject_name.into();
        if subject_name.is_empty() {
            return Err(ValidationError::empty_field("subject_name"));
        }
        if !(0.0..=100.0).contains(&performance_score) {
            return Err(ValidationError::out_of_range(
                "performance_score",
                0.0,
                100.0,
                performance_score,
            ));
        }
        if !(0.0..=100.0).contains(&consistency_score) {
            return Err(ValidationError::out_of_range(
                "consistency_score",
                0.0,
                100.0,
                consistency_score,
            ));
        }
        if study_frequency < 0.0 {
            return Err(ValidationError::invalid_value(
                "study_frequency",
                "cannot be negative",
            ));
        }
        Ok(Self {
            subject_id,
            subject_name,
            performance_score,
            consistency_score,
            study_frequency,
            status,
            last_studied_at: None,
        })
    }

    pub fn with_last_studied_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_studied_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_score_above_100() {
        let result = SubjectPerformance::new(
            SubjectId::new(),
            "Calculus",
            120.0,
            50.0,
            2.0,
            SubjectStatus::Good,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_frequency() {
        let result = SubjectPerformance::new(
            SubjectId::new(),
            "Calculus",
            80.0,
            50.0,
            -1.0,
            SubjectStatus::Good,
        );
        assert!(result.is_err());
    }

    #[test]
    fn critical_and_needs_attention_warrant_intervention() {
        assert!(SubjectStatus::Critical.needs_intervention());
        assert!(SubjectStatus::NeedsAttention.needs_intervention());
        assert!(!SubjectStatus::Good.needs_intervention());
    }
}
