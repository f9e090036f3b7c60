//! Recommendation endpoints: dto / handlers / routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RecommendationAppState;
pub use routes::recommendation_routes;
