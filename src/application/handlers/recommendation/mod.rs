//! Handlers for the recommendation operations exposed to API layers.

mod apply_recommendation;
mod dismiss_recommendation;
mod generate_recommendations;
mod get_active_recommendations;
mod update_action_item;

pub use apply_recommendation::{ApplyRecommendationCommand, ApplyRecommendationHandler};
pub use dismiss_recommendation::{DismissRecommendationCommand, DismissRecommendationHandler};
pub use generate_recommendations::{
    GenerateError, GenerateRecommendationsCommand, GenerateRecommendationsHandler,
};
pub use get_active_recommendations::{
    GetActiveRecommendationsHandler, GetActiveRecommendationsQuery,
};
pub use update_action_item::{UpdateActionItemCommand, UpdateActionItemHandler};

use thiserror::Error;

use crate::domain::foundation::{ActionItemId, RecommendationId};
use crate::domain::recommendation::TransitionError;
use crate::ports::StoreError;

/// Errors from the lifecycle operations (apply, dismiss, action-item update).
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("recommendation {0} not found")]
    NotFound(RecommendationId),

    #[error("action item {item_id} not found on recommendation {recommendation_id}")]
    ActionItemNotFound {
        recommendation_id: RecommendationId,
        item_id: ActionItemId,
    },

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LifecycleError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => LifecycleError::NotFound(id),
            other => LifecycleError::Store(other),
        }
    }
}
