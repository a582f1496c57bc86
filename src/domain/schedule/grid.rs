//! WeekGrid - read model a renderer draws the calendar from.
//!
//! One row per grid time, one column per visible day, zero or one session
//! per cell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{SessionId, ValidationError};

use super::{ScheduleError, Session, SessionStatus, SessionStore, SlotTime, Week, Weekday};

/// Which days the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

impl FromStr for ViewMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            _ => Err(ValidationError::invalid_format("view", "expected 'week' or 'day'").into()),
        }
    }
}

/// A visible day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridColumn {
    pub day: Weekday,
    pub date: NaiveDate,
}

/// What a cell shows for a booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSession {
    pub id: SessionId,
    pub client: String,
    pub duration: u32,
    pub status: SessionStatus,
}

impl From<&Session> for CellSession {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            client: session.client().to_string(),
            duration: session.duration(),
            status: session.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub time: SlotTime,
    /// One entry per column, in column order.
    pub cells: Vec<Option<CellSession>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    pub week: Week,
    pub label: String,
    pub view: ViewMode,
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
}

impl WeekGrid {
    /// Projects the store onto `week`.
    ///
    /// In day mode only `focus_day` is shown (Monday when not given).
    pub fn build(
        store: &SessionStore,
        week: Week,
        view: ViewMode,
        focus_day: Option<Weekday>,
    ) -> Self {
        let days: Vec<Weekday> = match view {
            ViewMode::Week => Weekday::ALL.to_vec(),
            ViewMode::Day => vec![focus_day.unwrap_or(Weekday::Monday)],
        };

        let columns = days
            .iter()
            .map(|&day| GridColumn {
                day,
                date: week.date_of(day),
            })
            .collect();

        let rows = store
            .grid()
            .time_slots()
            .into_iter()
            .map(|time| GridRow {
                time,
                cells: days
                    .iter()
                    .map(|&day| store.session_at(day, time).map(CellSession::from))
                    .collect(),
            })
            .collect();

        Self {
            week,
            label: week.label(),
            view,
            columns,
            rows,
        }
    }

    /// Number of booked cells.
    pub fn booked_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::SlotGrid;

    fn t(raw: &str) -> SlotTime {
        raw.parse().unwrap()
    }

    fn store() -> SessionStore {
        let sessions = vec![
            Session::new(
                SessionId::new(1),
                Weekday::Monday,
                t("09:00"),
                "Maria",
                50,
                SessionStatus::Confirmed,
            )
            .unwrap(),
            Session::new(
                SessionId::new(2),
                Weekday::Wednesday,
                t("15:00"),
                "Carlos",
                50,
                SessionStatus::Pending,
            )
            .unwrap(),
        ];
        SessionStore::from_seed(SlotGrid::default(), sessions).unwrap()
    }

    fn week() -> Week {
        Week::containing(NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()).unwrap()
    }

    #[test]
    fn week_view_has_all_days_and_rows() {
        let grid = WeekGrid::build(&store(), week(), ViewMode::Week, None);
        assert_eq!(grid.columns.len(), 5);
        assert_eq!(grid.rows.len(), 10);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 5));
        assert_eq!(grid.booked_cells(), 2);
        assert_eq!(grid.columns[2].date, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
    }

    #[test]
    fn cells_land_in_matching_row_and_column() {
        let grid = WeekGrid::build(&store(), week(), ViewMode::Week, None);
        let row = grid.rows.iter().find(|r| r.time == t("15:00")).unwrap();
        let cell = row.cells[2].as_ref().unwrap();
        assert_eq!(cell.client, "Carlos");
        assert_eq!(cell.status, SessionStatus::Pending);
        assert!(row.cells[0].is_none());
    }

    #[test]
    fn day_view_shows_focus_day_only() {
        let grid = WeekGrid::build(&store(), week(), ViewMode::Day, Some(Weekday::Monday));
        assert_eq!(grid.columns.len(), 1);
        assert_eq!(grid.columns[0].day, Weekday::Monday);
        assert_eq!(grid.booked_cells(), 1);
    }

    #[test]
    fn view_mode_parses() {
        assert_eq!("Week".parse::<ViewMode>().unwrap(), ViewMode::Week);
        assert_eq!("day".parse::<ViewMode>().unwrap(), ViewMode::Day);
        assert!(matches!(
            "month".parse::<ViewMode>(),
            Err(ScheduleError::Validation(_))
        ));
    }
}
