//! Configuration management for rigsmith
//!
//! Engine tunables load from environment variables with sensible defaults.
//! The search-loop policy knobs (attempt cap, deadline, acceptance
//! threshold, overspend tolerance) live here rather than as constants in
//! the algorithm: they are product policy, not invariants.
//!
//! # Environment Variables
//!
//! - `RIGSMITH_MAX_ATTEMPTS`: search attempt cap - default: "150"
//! - `RIGSMITH_TIMEOUT_SECS`: wall-clock search budget - default: "45"
//! - `RIGSMITH_MIN_BUDGET_USAGE`: acceptance threshold (0..=1] - default: "0.75"
//! - `RIGSMITH_OVERSPEND_TOLERANCE`: allowed overshoot in currency units - default: "200"
//! - `RIGSMITH_LOG_LEVEL`: logging level - default: "info"

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_MAX_ATTEMPTS: u32 = 150;
const DEFAULT_TIMEOUT_SECS: u64 = 45;
const DEFAULT_MIN_BUDGET_USAGE: f64 = 0.75;
const DEFAULT_OVERSPEND_TOLERANCE: f64 = 200.0;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse a configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Engine tunables for one rigsmith process.
///
/// Construct with `Default::default()` to load from environment variables
/// with fallback defaults.
#[derive(Debug, Clone)]
pub struct RigsmithConfig {
    /// Maximum platform kits the search loop will try per request
    pub max_attempts: u32,

    /// Wall-clock budget for one search, in seconds
    pub timeout_secs: u64,

    /// Budget usage ratio at which a candidate build is accepted outright
    pub min_budget_usage: f64,

    /// How far past the ceiling a build may land, in currency units
    pub overspend_tolerance: f64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for RigsmithConfig {
    fn default() -> Self {
        let max_attempts = env::var("RIGSMITH_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let timeout_secs = env::var("RIGSMITH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let min_budget_usage = env::var("RIGSMITH_MIN_BUDGET_USAGE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_MIN_BUDGET_USAGE);

        let overspend_tolerance = env::var("RIGSMITH_OVERSPEND_TOLERANCE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_OVERSPEND_TOLERANCE);

        let log_level = env::var("RIGSMITH_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            max_attempts,
            timeout_secs,
            min_budget_usage,
            overspend_tolerance,
            log_level,
        }
    }
}

impl RigsmithConfig {
    /// Validates the configuration ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ValidationFailed(
                "Attempt cap must be at least 1".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Search timeout must be at least 1 second".to_string(),
            ));
        }
        if self.timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Search timeout cannot exceed 10 minutes".to_string(),
            ));
        }
        if !(self.min_budget_usage > 0.0 && self.min_budget_usage <= 1.0) {
            return Err(ConfigError::ValidationFailed(
                "Acceptance threshold must be within (0, 1]".to_string(),
            ));
        }
        if !self.overspend_tolerance.is_finite() || self.overspend_tolerance < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "Overspend tolerance must be non-negative".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// The wall-clock search budget as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Converts configuration to a display map for output formatting.
    pub fn to_display_map(&self) -> std::collections::HashMap<String, String> {
        let mut map = std::collections::HashMap::new();
        map.insert("max_attempts".to_string(), self.max_attempts.to_string());
        map.insert("timeout_secs".to_string(), self.timeout_secs.to_string());
        map.insert(
            "min_budget_usage".to_string(),
            self.min_budget_usage.to_string(),
        );
        map.insert(
            "overspend_tolerance".to_string(),
            self.overspend_tolerance.to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());
        map
    }
}

impl fmt::Display for RigsmithConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rigsmith Configuration:")?;
        writeln!(f, "  Max Attempts: {}", self.max_attempts)?;
        writeln!(f, "  Timeout: {}s", self.timeout_secs)?;
        writeln!(f, "  Min Budget Usage: {}", self.min_budget_usage)?;
        writeln!(f, "  Overspend Tolerance: {}", self.overspend_tolerance)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
