//! SlotGrid - the visible range of bookable times.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{ScheduleError, SlotTime};

/// Visible time range of the weekly grid: rows run from `start_hour:00` to
/// `end_hour:00` inclusive, one every `step_minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSlotGrid")]
pub struct SlotGrid {
    start_hour: u8,
    end_hour: u8,
    step_minutes: u16,
}

#[derive(Deserialize)]
struct RawSlotGrid {
    start_hour: u8,
    end_hour: u8,
    step_minutes: u16,
}

impl TryFrom<RawSlotGrid> for SlotGrid {
    type Error = ScheduleError;

    fn try_from(raw: RawSlotGrid) -> Result<Self, Self::Error> {
        SlotGrid::new(raw.start_hour, raw.end_hour, raw.step_minutes)
    }
}

impl SlotGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// - `Validation` if `end_hour > 23`, `start_hour > end_hour`, or the
    ///   step is outside `1..=60`
    pub fn new(start_hour: u8, end_hour: u8, step_minutes: u16) -> Result<Self, ScheduleError> {
        if end_hour > 23 {
            return Err(ValidationError::out_of_range("end_hour", 0, 23, end_hour.into()).into());
        }
        if start_hour > end_hour {
            return Err(ValidationError::out_of_range(
                "start_hour",
                0,
                end_hour.into(),
                start_hour.into(),
            )
            .into());
        }
        if step_minutes == 0 || step_minutes > 60 {
            return Err(
                ValidationError::out_of_range("step_minutes", 1, 60, step_minutes.into()).into(),
            );
        }

        Ok(Self {
            start_hour,
            end_hour,
            step_minutes,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn step_minutes(&self) -> u16 {
        self.step_minutes
    }

    fn first_minute(&self) -> u16 {
        u16::from(self.start_hour) * 60
    }

    fn last_minute(&self) -> u16 {
        u16::from(self.end_hour) * 60
    }

    /// Ordered grid rows, first to last.
    pub fn time_slots(&self) -> Vec<SlotTime> {
        (self.first_minute()..=self.last_minute())
            .step_by(usize::from(self.step_minutes))
            .filter_map(|minutes| SlotTime::from_minutes(minutes).ok())
            .collect()
    }

    /// Number of rows in the grid.
    pub fn slot_count(&self) -> usize {
        usize::from((self.last_minute() - self.first_minute()) / self.step_minutes) + 1
    }

    /// True if `time` is inside the range and lands on a row boundary.
    pub fn contains(&self, time: SlotTime) -> bool {
        let minutes = time.minutes_since_midnight();
        minutes >= self.first_minute()
            && minutes <= self.last_minute()
            && (minutes - self.first_minute()) % self.step_minutes == 0
    }

    /// Rejects times that are not grid rows.
    pub fn check(&self, time: SlotTime) -> Result<(), ScheduleError> {
        if self.contains(time) {
            Ok(())
        } else {
            Err(ScheduleError::InvalidTime(time.to_string()))
        }
    }
}

impl Default for SlotGrid {
    /// 08:00 to 17:00, hourly.
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 17,
            step_minutes: 60,
        }
    }
}
