//! Session entity and its untyped record form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, ValidationError};

use super::{ScheduleError, SessionStatus, SlotTime, Weekday};

/// Longest bookable session, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 8 * 60;

/// A booking occupying exactly one `(day, time)` slot.
///
/// Fields are private so every `Session` in circulation has passed
/// validation; build one with [`Session::new`] or from a [`SessionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    day: Weekday,
    time: SlotTime,
    client: String,
    duration: u32,
    status: SessionStatus,
}

impl Session {
    /// Creates a validated session.
    ///
    /// # Errors
    ///
    /// - `Validation` if `client` is blank or `duration` is zero or above
    ///   [`MAX_DURATION_MINUTES`]
    pub fn new(
        id: SessionId,
        day: Weekday,
        time: SlotTime,
        client: impl Into<String>,
        duration: u32,
        status: SessionStatus,
    ) -> Result<Self, ScheduleError> {
        let client = client.into().trim().to_string();
        if client.is_empty() {
            return Err(ValidationError::empty_field("client").into());
        }
        if duration == 0 || duration > MAX_DURATION_MINUTES {
            return Err(
                ValidationError::out_of_range("duration", 1, MAX_DURATION_MINUTES, duration)
                    .into(),
            );
        }

        Ok(Self {
            id,
            day,
            time,
            client,
            duration,
            status,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn time(&self) -> SlotTime {
        self.time
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The `(day, time)` key this session occupies.
    pub fn slot(&self) -> (Weekday, SlotTime) {
        (self.day, self.time)
    }
}

/// Untyped form of a session as it arrives from seed files or requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: u32,
    pub day: String,
    pub time: String,
    pub client: String,
    pub duration: u32,
    pub status: String,
}

impl TryFrom<SessionRecord> for Session {
    type Error = ScheduleError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let day: Weekday = record.day.parse()?;
        let time: SlotTime = record.time.parse()?;
        let status: SessionStatus = record.status.parse()?;
        Session::new(
            SessionId::new(record.id),
            day,
            time,
            record.client,
            record.duration,
            status,
        )
    }
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.value(),
            day: session.day.to_string(),
            time: session.time.to_string(),
            client: session.client.clone(),
            duration: session.duration,
            status: session.status.to_string(),
        }
    }
}
