//! BookSessionHandler - Command handler for booking a session into a slot.

use std::sync::Arc;

use crate::domain::schedule::{ScheduleError, Session, SessionRecord};
use crate::ports::SessionRepository;

/// Command to book a session. Fields arrive untyped and are validated here.
#[derive(Debug, Clone)]
pub struct BookSessionCommand {
    pub record: SessionRecord,
}

/// Handler for booking sessions.
pub struct BookSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl BookSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: BookSessionCommand) -> Result<Session, ScheduleError> {
        // 1. Validate into a typed session
        let session = Session::try_from(cmd.record)?;

        // 2. Book it; the repository rejects taken slots and ids
        if let Err(err) = self.repository.add(session.clone()).await {
            tracing::warn!(
                "Booking {} rejected for {} {}: {}",
                session.id(),
                session.day(),
                session.time(),
                err
            );
            return Err(err);
        }

        tracing::info!(
            "Booked session {} for {} on {} at {}",
            session.id(),
            session.client(),
            session.day(),
            session.time()
        );
        Ok(session)
    }
}
