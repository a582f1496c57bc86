//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SESSION_CALENDAR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use session_calendar::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod schedule;
mod server;

pub use error::{ConfigError, ValidationError};
pub use schedule::ScheduleConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup serving the built-in sample week.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Visible grid and seed data
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SESSION_CALENDAR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SESSION_CALENDAR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SESSION_CALENDAR__SCHEDULE__SEED_PATH=week.yaml` -> `schedule.seed_path = "week.yaml"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SESSION_CALENDAR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.schedule.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SESSION_CALENDAR__SERVER__PORT",
        "SESSION_CALENDAR__SERVER__ENVIRONMENT",
        "SESSION_CALENDAR__SCHEDULE__START_HOUR",
        "SESSION_CALENDAR__SCHEDULE__END_HOUR",
        "SESSION_CALENDAR__SCHEDULE__STEP_MINUTES",
        "SESSION_CALENDAR__SCHEDULE__SEED_PATH",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.schedule.start_hour, 8);
        assert_eq!(config.schedule.end_hour, 17);
        assert!(config.schedule.seed_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_schedule_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SESSION_CALENDAR__SCHEDULE__START_HOUR", "9");
        env::set_var("SESSION_CALENDAR__SCHEDULE__END_HOUR", "12");
        env::set_var("SESSION_CALENDAR__SCHEDULE__STEP_MINUTES", "30");
        env::set_var("SESSION_CALENDAR__SCHEDULE__SEED_PATH", "week.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.schedule.start_hour, 9);
        assert_eq!(config.schedule.end_hour, 12);
        assert_eq!(config.schedule.step_minutes, 30);
        assert_eq!(config.schedule.seed_path.as_deref(), Some("week.yaml"));
        assert_eq!(config.schedule.slot_grid().unwrap().slot_count(), 7);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SESSION_CALENDAR__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SESSION_CALENDAR__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_schedule() {
        let config = AppConfig {
            schedule: ScheduleConfig {
                step_minutes: 120,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSlotStep(120))
        ));
    }
}
