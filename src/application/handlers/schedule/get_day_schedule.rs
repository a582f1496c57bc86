//! GetDayScheduleHandler - Query handler for the sessions of one day.

use std::sync::Arc;

use crate::domain::schedule::{ScheduleError, Session, Weekday};
use crate::ports::SessionRepository;

/// Query for one day of the week, by its untyped key.
#[derive(Debug, Clone)]
pub struct GetDayScheduleQuery {
    pub day: String,
}

/// Sessions of one day, in booking order.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub day: Weekday,
    pub sessions: Vec<Session>,
}

pub struct GetDayScheduleHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetDayScheduleHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDayScheduleQuery) -> Result<DaySchedule, ScheduleError> {
        let day: Weekday = query.day.parse()?;
        let sessions = self.repository.sessions_for_day(day).await?;
        Ok(DaySchedule { day, sessions })
    }
}
