//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables with the
//! `STUDY_COMPASS` prefix; nested values use `__` as separator, e.g.
//! `STUDY_COMPASS__SERVER__PORT=8080` -> `server.port`.

mod engine;
mod error;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment).
    #[serde(default)]
    pub server: ServerConfig,

    /// Recommendation engine tuning.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Loads configuration from a `.env` file (if present) and the
    /// environment. Every section has defaults, so an empty environment is
    /// a valid development configuration.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STUDY_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation across all sections.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_engine_thresholds_match_platform_tuning() {
        let config = AppConfig::default();
        assert_eq!(config.engine.rules.consistency_threshold, 50.0);
        assert_eq!(config.engine.rules.streak_target_days, 7);
        assert_eq!(config.engine.recent_session_window_days, 14);
    }
}
