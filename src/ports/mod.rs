//! Collaborator contracts consumed by the recommendation core.
//!
//! Adapters implement these; the application layer only sees the traits.

mod activity_provider;
mod performance_provider;
mod profile_provider;
mod recommendation_store;

pub use activity_provider::ActivityProvider;
pub use performance_provider::PerformanceProvider;
pub use profile_provider::ProfileProvider;
pub use recommendation_store::{
    RecommendationFilters, RecommendationPatch, RecommendationStore, StoreError,
};

use thiserror::Error;

/// Errors from the read-side providers.
///
/// Any provider failure is fatal to the generation pass that needed it; the
/// core does no retries of its own.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider data unavailable: {0}")]
    Unavailable(String),

    #[error("provider rejected the request: {0}")]
    Rejected(String),
}
