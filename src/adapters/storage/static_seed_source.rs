//! Static Seed Source Adapter
//!
//! A built-in sample week, used when no seed file is configured.

use async_trait::async_trait;

use crate::domain::schedule::SessionRecord;
use crate::ports::{SeedSource, SeedSourceError};

const SAMPLE_WEEK: &[(u32, &str, &str, &str, u32, &str)] = &[
    (1, "monday", "09:00", "Maria Silva", 50, "confirmed"),
    (2, "monday", "14:00", "João Santos", 50, "confirmed"),
    (3, "tuesday", "10:00", "Ana Costa", 50, "pending"),
    (4, "wednesday", "09:00", "Pedro Oliveira", 50, "confirmed"),
    (5, "wednesday", "15:00", "Carla Mendes", 50, "confirmed"),
    (6, "thursday", "11:00", "Lucas Ferreira", 50, "pending"),
    (7, "friday", "16:00", "Beatriz Rocha", 50, "confirmed"),
];

/// Seed source returning the built-in sample week
#[derive(Debug, Clone, Default)]
pub struct StaticSeedSource;

impl StaticSeedSource {
    pub fn new() -> Self {
        Self
    }

    /// The sample records, without going through the async port
    pub fn records() -> Vec<SessionRecord> {
        SAMPLE_WEEK
            .iter()
            .map(|&(id, day, time, client, duration, status)| SessionRecord {
                id,
                day: day.to_string(),
                time: time.to_string(),
                client: client.to_string(),
                duration,
                status: status.to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn load(&self) -> Result<Vec<SessionRecord>, SeedSourceError> {
        Ok(Self::records())
    }
}
