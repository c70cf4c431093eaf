//! Configuration structures.
//!
//! Configuration is loaded from a JSON file and overlaid with environment
//! variables prefixed `TOOL_REGISTRY_`.

use super::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable selecting the log format (`json` or anything else).
pub const ENV_LOG_FORMAT: &str = "TOOL_REGISTRY_LOG_FORMAT";
/// Environment variable overriding the default log level.
pub const ENV_LOG_LEVEL: &str = "TOOL_REGISTRY_LOG_LEVEL";
/// Environment variable overriding `availability.max_concurrent_checks`.
pub const ENV_MAX_CONCURRENT_CHECKS: &str = "TOOL_REGISTRY_MAX_CONCURRENT_CHECKS";

/// Global registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Availability check configuration.
    #[serde(default)]
    pub availability: AvailabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Availability check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Maximum availability checks in flight per `list_user_tools` call.
    /// A value of 1 runs checks sequentially.
    pub max_concurrent_checks: usize,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            max_concurrent_checks: 8,
        }
    }
}

impl Config {
    /// Parse configuration from a JSON document. Missing sections use defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Overlay values from an environment lookup.
    ///
    /// Takes the lookup as a closure so callers (and tests) are not tied to
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        if let Some(raw) = lookup(ENV_MAX_CONCURRENT_CHECKS) {
            self.availability.max_concurrent_checks = raw.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_CONCURRENT_CHECKS, raw
                ))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.availability.max_concurrent_checks == 0 {
            return Err(Error::config(
                "availability.max_concurrent_checks must be at least 1",
            ));
        }
        Ok(())
    }
}
