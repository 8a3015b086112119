//! Application configuration

use config::{Config, ConfigError, Environment};
use core_kernel::CoreError;
use serde::Deserialize;

/// Prefix of the environment variables read by `AppConfig::from_env`
pub const ENV_PREFIX: &str = "CATALOG";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level filter, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Think-time a demo writer spends between reading and writing, in milliseconds
    pub caller_delay_ms: u64,
    /// Number of writers in the contention demo
    pub concurrent_writers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            caller_delay_ms: 200,
            concurrent_writers: 8,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CATALOG_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source, falling back to defaults per field
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("caller_delay_ms", defaults.caller_delay_ms)?
            .set_default("concurrent_writers", defaults.concurrent_writers as u64)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Checks values serde cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.concurrent_writers == 0 {
            return Err(CoreError::configuration(
                "concurrent_writers must be at least 1",
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(CoreError::configuration("log_level must not be empty"));
        }
        Ok(())
    }

    /// Returns the demo writer think-time
    pub fn caller_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.caller_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.caller_delay_ms, 200);
        assert_eq!(config.concurrent_writers, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = AppConfig::from_environment(environment(&[
            ("CATALOG_LOG_LEVEL", "debug"),
            ("CATALOG_LOG_FORMAT", "json"),
            ("CATALOG_CALLER_DELAY_MS", "15"),
            ("CATALOG_CONCURRENT_WRITERS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.caller_delay(), std::time::Duration::from_millis(15));
        assert_eq!(config.concurrent_writers, 3);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = AppConfig::from_environment(environment(&[("CATALOG_LOG_FORMAT", "xml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_writers_fails_validation() {
        let config = AppConfig {
            concurrent_writers: 0,
            ..AppConfig::default()
        };

        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }
}
