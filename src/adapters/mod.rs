//! Adapters implementing the collaborator ports.

pub mod http;
pub mod memory;

pub use memory::{
    FixtureActivityProvider, FixturePerformanceProvider, FixtureProfileProvider,
    InMemoryRecommendationStore,
};
