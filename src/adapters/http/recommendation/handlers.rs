//! HTTP handlers connecting axum routes to the application handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    ApplyRecommendationCommand, ApplyRecommendationHandler, DismissRecommendationCommand,
    DismissRecommendationHandler, GenerateError, GenerateRecommendationsCommand,
    GenerateRecommendationsHandler, GetActiveRecommendationsHandler,
    GetActiveRecommendationsQuery, LifecycleError, UpdateActionItemCommand,
    UpdateActionItemHandler,
};
use crate::config::EngineConfig;
use crate::domain::foundation::{ActionItemId, Clock, RecommendationId, UserId};
use crate::ports::{
    ActivityProvider, PerformanceProvider, ProfileProvider, RecommendationStore, StoreError,
};

use super::dto::{
    ActiveRecommendationsParams, ErrorResponse, RecommendationListResponse,
    UpdateActionItemRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Recommendation API error that implements IntoResponse.
pub enum RecommendationApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unavailable(String),
    Internal(String),
}

impl IntoResponse for RecommendationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RecommendationApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            RecommendationApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            RecommendationApiError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorResponse::conflict(msg))
            }
            RecommendationApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorResponse::unavailable(msg))
            }
            RecommendationApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<GenerateError> for RecommendationApiError {
    fn from(error: GenerateError) -> Self {
        match error {
            GenerateError::DataUnavailable { .. } => {
                RecommendationApiError::Unavailable(error.to_string())
            }
        }
    }
}

impl From<LifecycleError> for RecommendationApiError {
    fn from(error: LifecycleError) -> Self {
        match error {
            LifecycleError::NotFound(_) | LifecycleError::ActionItemNotFound { .. } => {
                RecommendationApiError::NotFound(error.to_string())
            }
            LifecycleError::InvalidTransition(_) => {
                RecommendationApiError::Conflict(error.to_string())
            }
            LifecycleError::Store(inner) => RecommendationApiError::Internal(inner.to_string()),
        }
    }
}

impl From<StoreError> for RecommendationApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => {
                RecommendationApiError::NotFound(format!("recommendation {} not found", id))
            }
            StoreError::Storage(msg) => RecommendationApiError::Internal(msg),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state carrying the engine's collaborators.
#[derive(Clone)]
pub struct RecommendationAppState {
    pub performance: Arc<dyn PerformanceProvider>,
    pub profiles: Arc<dyn ProfileProvider>,
    pub activity: Arc<dyn ActivityProvider>,
    pub store: Arc<dyn RecommendationStore>,
    pub clock: Arc<dyn Clock>,
    pub engine: EngineConfig,
}

impl RecommendationAppState {
    pub fn generate_handler(&self) -> GenerateRecommendationsHandler {
        GenerateRecommendationsHandler::new(
            self.performance.clone(),
            self.profiles.clone(),
            self.activity.clone(),
            self.store.clone(),
            self.clock.clone(),
            &self.engine,
        )
    }

    pub fn get_active_handler(&self) -> GetActiveRecommendationsHandler {
        GetActiveRecommendationsHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn apply_handler(&self) -> ApplyRecommendationHandler {
        ApplyRecommendationHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn dismiss_handler(&self) -> DismissRecommendationHandler {
        DismissRecommendationHandler::new(self.store.clone(), self.clock.clone())
    }

    pub fn update_action_item_handler(&self) -> UpdateActionItemHandler {
        UpdateActionItemHandler::new(self.store.clone(), self.clock.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, RecommendationApiError> {
    UserId::new(raw).map_err(|e| RecommendationApiError::BadRequest(e.to_string()))
}

fn parse_recommendation_id(raw: &str) -> Result<RecommendationId, RecommendationApiError> {
    raw.parse().map_err(|_| {
        RecommendationApiError::BadRequest(format!("'{}' is not a valid recommendation id", raw))
    })
}

/// POST /api/users/:user_id/recommendations/generate
pub async fn generate_recommendations(
    State(state): State<RecommendationAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let user_id = parse_user_id(&user_id)?;
    let recommendations = state
        .generate_handler()
        .handle(GenerateRecommendationsCommand { user_id })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RecommendationListResponse::from(recommendations)),
    ))
}

/// GET /api/users/:user_id/recommendations
pub async fn get_active_recommendations(
    State(state): State<RecommendationAppState>,
    Path(user_id): Path<String>,
    Query(params): Query<ActiveRecommendationsParams>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let user_id = parse_user_id(&user_id)?;
    let filters = params
        .into_filters()
        .map_err(RecommendationApiError::BadRequest)?;
    let recommendations = state
        .get_active_handler()
        .handle(GetActiveRecommendationsQuery::for_user(user_id).with_filters(filters))
        .await?;
    Ok(Json(RecommendationListResponse::from(recommendations)))
}

/// POST /api/recommendations/:id/apply
pub async fn apply_recommendation(
    State(state): State<RecommendationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let recommendation_id = parse_recommendation_id(&id)?;
    let updated = state
        .apply_handler()
        .handle(ApplyRecommendationCommand { recommendation_id })
        .await?;
    Ok(Json(updated))
}

/// POST /api/recommendations/:id/dismiss
pub async fn dismiss_recommendation(
    State(state): State<RecommendationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let recommendation_id = parse_recommendation_id(&id)?;
    let updated = state
        .dismiss_handler()
        .handle(DismissRecommendationCommand { recommendation_id })
        .await?;
    Ok(Json(updated))
}

/// PATCH /api/recommendations/:rec_id/actions/:item_id
pub async fn update_action_item(
    State(state): State<RecommendationAppState>,
    Path((rec_id, item_id)): Path<(String, String)>,
    Json(body): Json<UpdateActionItemRequest>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let recommendation_id = parse_recommendation_id(&rec_id)?;
    let action_item_id: ActionItemId = item_id.parse().map_err(|_| {
        RecommendationApiError::BadRequest(format!("'{}' is not a valid action item id", item_id))
    })?;
    let updated = state
        .update_action_item_handler()
        .handle(UpdateActionItemCommand {
            recommendation_id,
            action_item_id,
            completed: body.completed,
        })
        .await?;
    Ok(Json(updated))
}
