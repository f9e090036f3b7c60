//! Development server for the recommendation API.
//!
//! Wires the HTTP surface over the in-memory adapters. Deployments replace
//! the fixtures with real provider and store adapters.

use std::error::Error;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use study_compass::adapters::http::{recommendation_routes, RecommendationAppState};
use study_compass::adapters::memory::{
    FixtureActivityProvider, FixturePerformanceProvider, FixtureProfileProvider,
    InMemoryRecommendationStore,
};
use study_compass::config::AppConfig;
use study_compass::domain::context::{SubjectPerformance, SubjectStatus};
use study_compass::domain::foundation::{SubjectId, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let subjects = vec![
        SubjectPerformance::new(
            SubjectId::new(),
            "Calculus",
            45.0,
            35.0,
            1.0,
            SubjectStatus::Critical,
        )?,
        SubjectPerformance::new(
            SubjectId::new(),
            "History",
            76.0,
            70.0,
            3.0,
            SubjectStatus::Good,
        )?,
    ];

    let state = RecommendationAppState {
        performance: Arc::new(FixturePerformanceProvider::with_subjects(subjects)),
        profiles: Arc::new(FixtureProfileProvider::empty()),
        activity: Arc::new(FixtureActivityProvider::empty()),
        store: Arc::new(InMemoryRecommendationStore::new()),
        clock: Arc::new(SystemClock),
        engine: config.engine.clone(),
    };

    let app = recommendation_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "recommendation API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
