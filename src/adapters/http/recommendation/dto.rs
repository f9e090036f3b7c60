//! Request/response DTOs for the recommendation endpoints.
//!
//! Domain records already serialize camelCase, so responses embed them
//! directly; this module adds the envelope, error body, and request shapes.

use serde::{Deserialize, Serialize};

use crate::domain::recommendation::{Category, Priority, RecommendationType, StudyRecommendation};
use crate::ports::RecommendationFilters;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "DATA_UNAVAILABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

/// Response wrapper for recommendation lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationListResponse {
    pub recommendations: Vec<StudyRecommendation>,
    pub count: usize,
}

impl From<Vec<StudyRecommendation>> for RecommendationListResponse {
    fn from(recommendations: Vec<StudyRecommendation>) -> Self {
        let count = recommendations.len();
        Self {
            recommendations,
            count,
        }
    }
}

/// Query parameters narrowing the active set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRecommendationsParams {
    #[serde(rename = "type")]
    pub recommendation_type: Option<RecommendationType>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub subject_id: Option<String>,
}

impl ActiveRecommendationsParams {
    /// Converts the raw parameters into domain filters.
    ///
    /// Fails when `subjectId` is not a UUID.
    pub fn into_filters(self) -> Result<RecommendationFilters, String> {
        let subject_id = match self.subject_id {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| format!("'{}' is not a valid subject id", raw))?,
            ),
            None => None,
        };
        Ok(RecommendationFilters {
            recommendation_type: self.recommendation_type,
            priority: self.priority,
            category: self.category,
            subject_id,
        })
    }
}

/// Body for the action-item completion endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActionItemRequest {
    pub completed: bool,
}
