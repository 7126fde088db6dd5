//! Slidedown configuration system
//!
//! This crate provides centralized configuration for the slidedown panel,
//! loading settings from `slidedown.toml` as an alternative to environment
//! variables. The transition duration configured here is the contract the
//! host environment's native height transition must agree with: if the two
//! differ, completion notifications fire early or late relative to what is
//! visually expected.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the slidedown panel
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SlideConfig {
    /// Height transition settings
    pub transition: TransitionConfig,
    /// First-render (appear) settings
    pub appear: AppearConfig,
}

/// Height transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Total visual duration of a height transition in milliseconds.
    /// Must match the host's native transition-duration for the height
    /// property.
    pub duration_ms: f64,
}

/// Appear (first render) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearConfig {
    /// Whether panels animate open on their very first render when the
    /// instance does not set the flag explicitly.
    pub transition_on_appear: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 110.0 }
    }
}

impl Default for AppearConfig {
    fn default() -> Self {
        Self {
            transition_on_appear: true,
        }
    }
}

impl SlideConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the slidedown.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SlideConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (slidedown.toml in the
    /// current directory) or return default configuration if the file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("slidedown.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("SLIDEDOWN_DURATION_MS") {
            if let Ok(ms) = val.parse::<f64>() {
                if ms >= 0.0 {
                    self.transition.duration_ms = ms;
                }
            }
        }
        if let Ok(val) = std::env::var("SLIDEDOWN_TRANSITION_ON_APPEAR") {
            self.appear.transition_on_appear = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from slidedown.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
