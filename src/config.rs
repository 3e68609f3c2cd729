//! Configuration management for GameSmith
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{GameSmithError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for GameSmith
///
/// Holds the generative-backend settings and preview output defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generative backend configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Preview document output settings
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Generative backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier for the generateContent endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for every generation call
    ///
    /// Fixed at a moderate, deterministic-leaning value rather than varying
    /// per call.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional API base URL override (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the `generateContent` endpoint,
    /// which allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,

    /// API key. Normally supplied via the `GEMINI_API_KEY` environment
    /// variable; a config-file value is mainly for test fixtures.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-04-17".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            api_base: None,
            api_key: None,
        }
    }
}

/// Preview document output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Default path for the exported preview document
    #[serde(default = "default_preview_output")]
    pub output: String,
}

fn default_preview_output() -> String {
    "preview.html".to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: default_preview_output(),
        }
    }
}

impl Config {
    /// Load configuration from a file with environment and CLI overrides
    ///
    /// Falls back to built-in defaults when the file does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments whose overrides take precedence
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameSmithError::Configuration(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GameSmithError::Configuration(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(model) = std::env::var("GAMESMITH_MODEL") {
            self.provider.model = model;
        }
        if let Ok(api_base) = std::env::var("GAMESMITH_API_BASE") {
            self.provider.api_base = Some(api_base);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                self.provider.api_key = Some(key);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(model) = &cli.model {
            self.provider.model = model.clone();
        }
    }

    /// Validate the configuration
    ///
    /// Credential presence is deliberately not checked here: it is a
    /// per-action concern of the provider, not a startup-fatal one.
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.is_empty() {
            return Err(GameSmithError::Configuration(
                "provider.model cannot be empty".to_string(),
            )
            .into());
        }

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(GameSmithError::Configuration(format!(
                "provider.temperature must be between 0.0 and 2.0, got {}",
                self.provider.temperature
            ))
            .into());
        }

        if self.preview.output.is_empty() {
            return Err(GameSmithError::Configuration(
                "preview.output cannot be empty".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}
