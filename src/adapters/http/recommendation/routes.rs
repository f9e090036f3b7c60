//! HTTP routes for recommendation endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    apply_recommendation, dismiss_recommendation, generate_recommendations,
    get_active_recommendations, update_action_item, RecommendationAppState,
};

/// Creates the recommendation router with all routes.
pub fn recommendation_routes(state: RecommendationAppState) -> Router {
    Router::new()
        // POST /api/users/:user_id/recommendations/generate
        .route(
            "/api/users/:user_id/recommendations/generate",
            post(generate_recommendations),
        )
        // GET /api/users/:user_id/recommendations
        .route(
            "/api/users/:user_id/recommendations",
            get(get_active_recommendations),
        )
        // POST /api/recommendations/:id/apply
        .route("/api/recommendations/:id/apply", post(apply_recommendation))
        // POST /api/recommendations/:id/dismiss
        .route("/api/recommendations/:id/dismiss", post(dismiss_recommendation))
        // PATCH /api/recommendations/:rec_id/actions/:item_id
        .route(
            "/api/recommendations/:rec_id/actions/:item_id",
            patch(update_action_item),
        )
        .with_state(state)
}
