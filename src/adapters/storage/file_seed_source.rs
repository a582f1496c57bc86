//! File-based Seed Source Adapter
//!
//! Reads the initial schedule from a YAML or JSON file. The file holds either
//! a bare list of session records or a mapping with a `sessions` list.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::schedule::SessionRecord;
use crate::ports::{SeedSource, SeedSourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedFormat {
    Yaml,
    Json,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    List(Vec<SessionRecord>),
    Wrapped { sessions: Vec<SessionRecord> },
}

impl SeedDocument {
    fn into_records(self) -> Vec<SessionRecord> {
        match self {
            SeedDocument::List(records) => records,
            SeedDocument::Wrapped { sessions } => sessions,
        }
    }
}

/// Seed source backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    /// Create a seed source for `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileSeedSource::new("./data/week.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<SeedFormat, SeedSourceError> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(SeedFormat::Yaml),
            Some("json") => Ok(SeedFormat::Json),
            _ => Err(SeedSourceError::UnsupportedFormat(
                self.path.display().to_string(),
            )),
        }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn load(&self) -> Result<Vec<SessionRecord>, SeedSourceError> {
        let format = self.format()?;

        if !self.path.exists() {
            return Err(SeedSourceError::NotFound(self.path.display().to_string()));
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SeedSourceError::IoError(e.to_string()))?;

        let document: SeedDocument = match format {
            SeedFormat::Yaml => serde_yaml::from_str(&raw)
                .map_err(|e| SeedSourceError::ParseFailed(e.to_string()))?,
            SeedFormat::Json => serde_json::from_str(&raw)
                .map_err(|e| SeedSourceError::ParseFailed(e.to_string()))?,
        };

        let records = document.into_records();
        tracing::debug!(
            "Loaded {} seed records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
