//! Time-of-day value object with minute granularity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ScheduleError;

/// A wall-clock time on the grid, rendered as `"HH:MM"`.
///
/// Ordering follows the clock, so a sorted set of slot times reads top to
/// bottom the way the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    minutes: u16,
}

impl SlotTime {
    /// Minutes in a day; valid times are strictly below this.
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTime` if the hour exceeds 23 or the minute exceeds 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Creates a time from minutes past midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, ScheduleError> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTime(format!("{} minutes", minutes)));
        }
        Ok(Self { minutes })
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Minutes past midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for SlotTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        SlotTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
