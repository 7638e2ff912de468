//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CILC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cilc::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Session API at {}", config.api.base_url);
//! ```

mod api;
mod calendar;
mod error;
mod logging;

pub use api::ApiConfig;
pub use calendar::{CalendarConfig, ClockKind};
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// development configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Session API client configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Calendar defaults (anchor date, initial view, clock)
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CILC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CILC__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `CILC__CALENDAR__DEFAULT_VIEW=month` -> `calendar.default_view = month`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CILC")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if loading fails and
    /// `ConfigError::ValidationFailed` if a value is out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.logging.environment)?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::ViewMode;
    use chrono::NaiveDate;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "CILC__API__BASE_URL",
        "CILC__API__TIMEOUT_SECS",
        "CILC__CALENDAR__ANCHOR_DATE",
        "CILC__CALENDAR__DEFAULT_VIEW",
        "CILC__CALENDAR__CLOCK",
        "CILC__LOGGING__ENVIRONMENT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000/api");
        assert_eq!(config.calendar.default_view, ViewMode::Week);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CILC__API__BASE_URL", "https://cilc.example.edu/api");
        env::set_var("CILC__API__TIMEOUT_SECS", "10");
        env::set_var("CILC__CALENDAR__ANCHOR_DATE", "2024-01-15");
        env::set_var("CILC__CALENDAR__DEFAULT_VIEW", "month");
        env::set_var("CILC__CALENDAR__CLOCK", "system");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://cilc.example.edu/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(
            config.calendar.anchor_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(config.calendar.default_view, ViewMode::Month);
        assert_eq!(config.calendar.clock, ClockKind::System);
    }

    #[test]
    fn test_production_requires_https() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CILC__LOGGING__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::BaseUrlMustBeHttps));
    }

    #[test]
    fn test_load_validated_reports_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CILC__API__TIMEOUT_SECS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidTimeout))
        ));
    }

    #[test]
    fn test_load_validated_accepts_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load_validated().unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }
}
