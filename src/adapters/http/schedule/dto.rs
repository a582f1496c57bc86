//! HTTP DTOs for schedule endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::schedule::DaySchedule;
use crate::domain::schedule::{ScheduleError, Session, SessionRecord, SessionStatus, Weekday};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

fn default_status() -> String {
    SessionStatus::default().to_string()
}

/// Request to book a session.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSessionRequest {
    pub id: u32,
    pub day: String,
    pub time: String,
    pub client: String,
    pub duration: u32,
    #[serde(default = "default_status")]
    pub status: String,
}

impl From<BookSessionRequest> for SessionRecord {
    fn from(req: BookSessionRequest) -> Self {
        Self {
            id: req.id,
            day: req.day,
            time: req.time,
            client: req.client,
            duration: req.duration,
            status: req.status,
        }
    }
}

/// Query parameters for listing one day.
#[derive(Debug, Clone, Deserialize)]
pub struct DayScheduleParams {
    pub day: String,
}

/// Query parameters for the week grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekGridParams {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A booked session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: u32,
    pub day: Weekday,
    pub time: String,
    pub client: String,
    pub duration: u32,
    pub status: SessionStatus,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id().value(),
            day: session.day(),
            time: session.time().to_string(),
            client: session.client().to_string(),
            duration: session.duration(),
            status: session.status(),
        }
    }
}

/// Sessions of one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayScheduleResponse {
    pub day: Weekday,
    pub sessions: Vec<SessionResponse>,
}

impl From<DaySchedule> for DayScheduleResponse {
    fn from(schedule: DaySchedule) -> Self {
        Self {
            day: schedule.day,
            sessions: schedule.sessions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

impl From<&ScheduleError> for ErrorResponse {
    fn from(err: &ScheduleError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
