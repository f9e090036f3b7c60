//! HTTP surface for the recommendation operations.

pub mod recommendation;

pub use recommendation::{recommendation_routes, RecommendationAppState};
