//! GetWeekGridHandler - Query handler for the calendar grid of a week.
//!
//! The grid is projected from a snapshot of the repository, so a booking that
//! lands while the grid is built shows up on the next query.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::schedule::{ScheduleError, ViewMode, Week, WeekGrid, Weekday};
use crate::ports::SessionRepository;

/// Query for the grid of one week.
#[derive(Debug, Clone, Default)]
pub struct GetWeekGridQuery {
    /// Any date inside the anchor week; today when `None`.
    pub reference_date: Option<NaiveDate>,
    /// Weeks to move from the anchor week (negative goes back).
    pub week_offset: i64,
    pub view: ViewMode,
    /// Day shown in day view; ignored in week view.
    pub focus_day: Option<Weekday>,
}

pub struct GetWeekGridHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetWeekGridHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWeekGridQuery) -> Result<WeekGrid, ScheduleError> {
        let anchor = match query.reference_date {
            Some(date) => Week::containing(date)?,
            None => Week::current()?,
        };
        let week = anchor.shift(query.week_offset)?;

        let snapshot = self.repository.snapshot().await?;

        Ok(WeekGrid::build(&snapshot, week, query.view, query.focus_day))
    }
}
