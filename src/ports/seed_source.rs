//! Seed Source Port - where the initial schedule comes from.
//!
//! A seed is a list of untyped session records. Validation happens when the
//! records are turned into sessions and added to a store, not here.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::schedule::SessionRecord;

/// Errors that can occur while reading seed data
#[derive(Debug, thiserror::Error)]
pub enum SeedSourceError {
    #[error("Seed file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse seed data: {0}")]
    ParseFailed(String),

    #[error("Unsupported seed format: {0}")]
    UnsupportedFormat(String),
}

impl SeedSourceError {
    fn reason(&self) -> &'static str {
        match self {
            SeedSourceError::NotFound(_) => "not_found",
            SeedSourceError::IoError(_) => "io",
            SeedSourceError::ParseFailed(_) => "parse",
            SeedSourceError::UnsupportedFormat(_) => "unsupported_format",
        }
    }
}

impl From<SeedSourceError> for DomainError {
    fn from(err: SeedSourceError) -> Self {
        DomainError::new(ErrorCode::SeedLoadFailed, err.to_string())
            .with_detail("reason", err.reason())
    }
}

/// Port for loading the initial list of sessions
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Load every seed record, in the order they should be booked.
    ///
    /// # Errors
    /// Returns `SeedSourceError` if the source cannot be read or parsed
    async fn load(&self) -> Result<Vec<SessionRecord>, SeedSourceError>;
}
