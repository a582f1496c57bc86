//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address")]
    InvalidHost,

    #[error("Invalid slot range: start hour {start} must not exceed end hour {end} (max 23)")]
    InvalidSlotRange { start: u8, end: u8 },

    #[error("Invalid slot step: {0} minutes (expected 1-60)")]
    InvalidSlotStep(u16),

    #[error("Seed path must not be empty")]
    EmptySeedPath,
}
