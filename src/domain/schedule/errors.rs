//! Schedule-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

use super::{SlotTime, Weekday};

/// Errors raised by the session store and the values it holds.
///
/// All of them are recoverable: a store that returns one is left exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Day key is not one of the five grid days.
    #[error("Invalid day: '{0}'")]
    InvalidDay(String),

    /// Time is unparseable, outside the visible grid, or off a step boundary.
    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    /// Status key is neither confirmed nor pending.
    #[error("Invalid status: '{0}'")]
    InvalidStatus(String),

    /// The slot already holds a session.
    #[error("Slot {day} {time} is already booked")]
    SlotConflict { day: Weekday, time: SlotTime },

    /// Another session already uses this id.
    #[error("Session id {0} is already in use")]
    DuplicateId(SessionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ScheduleError {
    pub fn slot_conflict(day: Weekday, time: SlotTime) -> Self {
        ScheduleError::SlotConflict { day, time }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::InvalidDay(_) => ErrorCode::InvalidDay,
            ScheduleError::InvalidTime(_) => ErrorCode::InvalidTime,
            ScheduleError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            ScheduleError::SlotConflict { .. } => ErrorCode::SlotConflict,
            ScheduleError::DuplicateId(_) => ErrorCode::DuplicateSession,
            ScheduleError::Validation(_) => ErrorCode::ValidationFailed,
            ScheduleError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for ScheduleError {
    fn from(err: DomainError) -> Self {
        ScheduleError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_conflict_displays_slot() {
        let err = ScheduleError::slot_conflict(Weekday::Monday, SlotTime::new(9, 0).unwrap());
        assert_eq!(err.to_string(), "Slot monday 09:00 is already booked");
        assert_eq!(err.code(), ErrorCode::SlotConflict);
    }

    #[test]
    fn validation_errors_convert() {
        let err: ScheduleError = ValidationError::empty_field("client").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn domain_errors_become_infrastructure() {
        let err: ScheduleError =
            DomainError::new(ErrorCode::SeedLoadFailed, "unreadable").into();
        assert_eq!(
            err,
            ScheduleError::Infrastructure("[SEED_LOAD_FAILED] unreadable".to_string())
        );
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
