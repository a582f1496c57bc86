//! GetSessionAtHandler - Query handler for a single slot.

use std::sync::Arc;

use crate::domain::schedule::{ScheduleError, Session, SlotTime, Weekday};
use crate::ports::SessionRepository;

/// Query for the session at one `(day, time)` slot.
#[derive(Debug, Clone)]
pub struct GetSessionAtQuery {
    pub day: String,
    pub time: String,
}

pub struct GetSessionAtHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionAtHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Returns `Ok(None)` for a free slot. Only malformed keys are errors.
    pub async fn handle(&self, query: GetSessionAtQuery) -> Result<Option<Session>, ScheduleError> {
        let day: Weekday = query.day.parse()?;
        let time: SlotTime = query.time.parse()?;
        self.repository.session_at(day, time).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemorySessionRepository, StaticSeedSource};
    use crate::domain::schedule::SlotGrid;

    fn handler() -> GetSessionAtHandler {
        let repo = InMemorySessionRepository::from_records(
            SlotGrid::default(),
            StaticSeedSource::records(),
        )
        .unwrap();
        GetSessionAtHandler::new(Arc::new(repo))
    }

    fn query(day: &str, time: &str) -> GetSessionAtQuery {
        GetSessionAtQuery {
            day: day.to_string(),
            time: time.to_string(),
        }
    }

    #[tokio::test]
    async fn finds_booked_slot() {
        let session = handler().handle(query("tuesday", "10:00")).await.unwrap().unwrap();
        assert_eq!(session.client(), "Ana Costa");
    }

    #[tokio::test]
    async fn free_slot_is_none() {
        assert!(handler().handle(query("tuesday", "11:00")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn repeated_queries_agree() {
        let handler = handler();
        let first = handler.handle(query("friday", "16:00")).await.unwrap();
        let second = handler.handle(query("friday", "16:00")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn malformed_keys_are_errors() {
        assert!(matches!(
            handler().handle(query("someday", "10:00")).await,
            Err(ScheduleError::InvalidDay(_))
        ));
        assert!(matches!(
            handler().handle(query("monday", "25:00")).await,
            Err(ScheduleError::InvalidTime(_))
        ));
    }
}
