//! SessionStatus enum for the confirmation state of a booking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ScheduleError;

/// Confirmation state of a booked session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Confirmed,
    #[default]
    Pending,
}

impl SessionStatus {
    /// Returns true once the client has confirmed the booking.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SessionStatus::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Confirmed => "confirmed",
            SessionStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(SessionStatus::Confirmed),
            "pending" => Ok(SessionStatus::Pending),
            _ => Err(ScheduleError::InvalidStatus(s.to_string())),
        }
    }
}
