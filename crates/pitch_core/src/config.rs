//! # Engine Configuration
//!
//! Tunable thresholds for the aggregators. Every field has a default, so an
//! empty JSON object (or no config file at all) reproduces the standard
//! Statcast definitions.
//!
//! ```rust,ignore
//! let config = EngineConfig::load("config/engine.yaml")?;
//! let arsenal = arsenal_metrics(&pitches, &config)?;
//! ```

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

/// Names a config file to load when the caller does not pass one.
pub const ENGINE_CONFIG_PATH_ENV: &str = "PITCH_ENGINE_CONFIG_PATH";

const MAX_PERCENTAGE_DECIMALS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exit velocity (mph) a ball in play must exceed to count as hard hit
    #[serde(default = "default_hard_hit_speed_mph")]
    pub hard_hit_speed_mph: f64,

    /// Decimal places kept on count-distribution percentages
    #[serde(default = "default_percentage_decimals")]
    pub percentage_decimals: u32,

    /// Attach the distinct `events` values to each count-distribution cell
    #[serde(default = "default_true")]
    pub include_unique_events: bool,
}

fn default_hard_hit_speed_mph() -> f64 {
    95.0
}
fn default_percentage_decimals() -> u32 {
    2
}
fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hard_hit_speed_mph: default_hard_hit_speed_mph(),
            percentage_decimals: default_percentage_decimals(),
            include_unique_events: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`/`.yml` or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Load the file named by [`ENGINE_CONFIG_PATH_ENV`], or defaults when unset.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        tracing::info!(path, "loading engine config from {}", ENGINE_CONFIG_PATH_ENV);
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.hard_hit_speed_mph.is_finite() || self.hard_hit_speed_mph < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "hard_hit_speed_mph must be a non-negative number, got {}",
                self.hard_hit_speed_mph
            )));
        }
        if self.percentage_decimals > MAX_PERCENTAGE_DECIMALS {
            return Err(EngineError::InvalidConfig(format!(
                "percentage_decimals must be 0-{}, got {}",
                MAX_PERCENTAGE_DECIMALS, self.percentage_decimals
            )));
        }
        Ok(())
    }
}
