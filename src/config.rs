//! Configuration System
//!
//! Client settings loaded from a TOML document. Every field has a default,
//! so an empty document (or none at all) yields a working configuration.

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Prefix joined in front of every dashboard endpoint
    #[serde(default = "default_api_base")]
    pub base: String,
}

fn default_api_base() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: default_api_base(),
        }
    }
}

/// Dashboard loader settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Page size requested for the recent works table
    #[serde(default = "default_recent_works_size")]
    pub recent_works_size: u32,
}

fn default_recent_works_size() -> u32 {
    10
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_works_size: default_recent_works_size(),
        }
    }
}

/// Toast settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ToastConfig {
    #[serde(default = "default_toast_delay")]
    pub delay_ms: u32,
}

fn default_toast_delay() -> u32 {
    crate::toast::DEFAULT_DELAY_MS
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_toast_delay(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Replace the API base, ignoring blank values
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim();
        if !base.is_empty() {
            self.api.base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Endpoint of the recent works table
    pub fn recent_works_endpoint(&self) -> String {
        format!("/works?size={}", self.dashboard.recent_works_size)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
