//! ListTimeSlotsHandler - Query handler for the visible grid rows.

use std::sync::Arc;

use crate::domain::schedule::{ScheduleError, SlotTime};
use crate::ports::SessionRepository;

pub struct ListTimeSlotsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListTimeSlotsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<SlotTime>, ScheduleError> {
        Ok(self.repository.grid().await?.time_slots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::schedule::SlotGrid;

    #[tokio::test]
    async fn lists_rows_of_repository_grid() {
        let repo = InMemorySessionRepository::new(SlotGrid::new(13, 15, 60).unwrap());
        let handler = ListTimeSlotsHandler::new(Arc::new(repo));

        let rows: Vec<String> = handler
            .handle()
            .await
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(rows, vec!["13:00", "14:00", "15:00"]);
    }
}
