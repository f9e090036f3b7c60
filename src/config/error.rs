//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded values.
#[derive(Debug, Clone, Error)]
pub enum ConfigValidationError {
    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("server host '{0}' is not a valid bind address")]
    InvalidHost(String),

    #[error("recent session window must be at least one day")]
    InvalidSessionWindow,

    #[error("configuration value '{0}' is out of range")]
    InvalidThreshold(&'static str),
}
