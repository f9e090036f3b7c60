//! In-memory adapters for tests and local development.

mod providers;
mod store;

pub use providers::{
    FixtureActivityProvider, FixturePerformanceProvider, FixtureProfileProvider,
};
pub use store::InMemoryRecommendationStore;
