//! Recommendation engine configuration.

use serde::Deserialize;

use crate::domain::rules::RuleConfig;

use super::error::ConfigValidationError;

/// Tuning for the recommendation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Thresholds the rule generators run on.
    #[serde(default)]
    pub rules: RuleConfig,

    /// How far back to fetch sessions for peak-hour analysis, in days.
    #[serde(default = "default_session_window")]
    pub recent_session_window_days: u32,

    /// Fixed PRNG seed for template selection. Unset means a random seed
    /// per process; set it to make generation output fully reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.recent_session_window_days == 0 {
            return Err(ConfigValidationError::InvalidSessionWindow);
        }
        if !(0.0..=100.0).contains(&self.rules.consistency_threshold) {
            return Err(ConfigValidationError::InvalidThreshold("rules.consistency_threshold"));
        }
        if !(0.0..=100.0).contains(&self.rules.goal_overload_mean_score) {
            return Err(ConfigValidationError::InvalidThreshold("rules.goal_overload_mean_score"));
        }
        if self.rules.peak_hour_count == 0 {
            return Err(ConfigValidationError::InvalidThreshold("rules.peak_hour_count"));
        }
        if self.rules.focus_expiry_days == 0 {
            return Err(ConfigValidationError::InvalidThreshold("rules.focus_expiry_days"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            recent_session_window_days: default_session_window(),
            rng_seed: None,
        }
    }
}

fn default_session_window() -> u32 {
    14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_session_window_fails_validation() {
        let config = EngineConfig {
            recent_session_window_days: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_consistency_threshold_fails_validation() {
        let mut config = EngineConfig::default();
        config.rules.consistency_threshold = 150.0;
        assert!(config.validate().is_err());
    }
}
