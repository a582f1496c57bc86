//! Week value object for moving the calendar backwards and forwards.

use chrono::{Datelike, Days, NaiveDate, TimeDelta};
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::{ScheduleError, Weekday};

/// A calendar week, identified by its Monday.
///
/// Its Friday is always a representable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Week(NaiveDate);

fn out_of_range() -> ScheduleError {
    ValidationError::invalid_format("week", "date is outside the supported calendar range").into()
}

impl Week {
    fn from_monday(monday: NaiveDate) -> Result<Self, ScheduleError> {
        monday
            .checked_add_days(Days::new(4))
            .map(|_| Self(monday))
            .ok_or_else(out_of_range)
    }

    /// The week containing `date`. Saturday and Sunday belong to the week
    /// they close.
    ///
    /// # Errors
    ///
    /// - `Validation` if the week would leave chrono's date range
    pub fn containing(date: NaiveDate) -> Result<Self, ScheduleError> {
        let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
        date.checked_sub_days(back)
            .ok_or_else(out_of_range)
            .and_then(Self::from_monday)
    }

    /// The week containing today's date (UTC).
    pub fn current() -> Result<Self, ScheduleError> {
        Self::containing(chrono::Utc::now().date_naive())
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    pub fn friday(&self) -> NaiveDate {
        self.date_of(Weekday::Friday)
    }

    /// Moves by `weeks`; negative values go back in time.
    ///
    /// # Errors
    ///
    /// - `Validation` if the target week is not representable
    pub fn shift(&self, weeks: i64) -> Result<Self, ScheduleError> {
        TimeDelta::try_weeks(weeks)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .ok_or_else(out_of_range)
            .and_then(Self::from_monday)
    }

    pub fn next(&self) -> Result<Self, ScheduleError> {
        self.shift(1)
    }

    pub fn previous(&self) -> Result<Self, ScheduleError> {
        self.shift(-1)
    }

    /// Calendar date of a grid day in this week.
    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        // Friday was checked in from_monday.
        self.0
            .checked_add_days(Days::new(u64::from(day.offset_from_monday())))
            .unwrap_or(self.0)
    }

    /// Monday–Friday range, e.g. `13/10 - 17/10/2025`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.monday().format("%d/%m"),
            self.friday().format("%d/%m/%Y")
        )
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
