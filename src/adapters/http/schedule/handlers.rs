//! HTTP handlers for schedule endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::schedule::{
    BookSessionCommand, BookSessionHandler, GetDayScheduleHandler, GetDayScheduleQuery,
    GetSessionAtHandler, GetSessionAtQuery, GetWeekGridHandler, GetWeekGridQuery,
    ListTimeSlotsHandler,
};
use crate::domain::schedule::{ScheduleError, ViewMode, Weekday};
use crate::ports::SessionRepository;

use super::dto::{
    BookSessionRequest, DayScheduleParams, DayScheduleResponse, ErrorResponse, SessionResponse,
    WeekGridParams,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScheduleHandlers {
    book_handler: Arc<BookSessionHandler>,
    day_handler: Arc<GetDayScheduleHandler>,
    slot_handler: Arc<GetSessionAtHandler>,
    time_slots_handler: Arc<ListTimeSlotsHandler>,
    grid_handler: Arc<GetWeekGridHandler>,
}

impl ScheduleHandlers {
    pub fn new(
        book_handler: Arc<BookSessionHandler>,
        day_handler: Arc<GetDayScheduleHandler>,
        slot_handler: Arc<GetSessionAtHandler>,
        time_slots_handler: Arc<ListTimeSlotsHandler>,
        grid_handler: Arc<GetWeekGridHandler>,
    ) -> Self {
        Self {
            book_handler,
            day_handler,
            slot_handler,
            time_slots_handler,
            grid_handler,
        }
    }

    /// Wires every handler to the same repository.
    pub fn from_repository(repository: Arc<dyn SessionRepository>) -> Self {
        Self::new(
            Arc::new(BookSessionHandler::new(repository.clone())),
            Arc::new(GetDayScheduleHandler::new(repository.clone())),
            Arc::new(GetSessionAtHandler::new(repository.clone())),
            Arc::new(ListTimeSlotsHandler::new(repository.clone())),
            Arc::new(GetWeekGridHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> &'static str {
    "ok"
}

/// POST /sessions - Book a session
pub async fn book_session(
    State(handlers): State<ScheduleHandlers>,
    Json(req): Json<BookSessionRequest>,
) -> Response {
    let cmd = BookSessionCommand { record: req.into() };

    match handlers.book_handler.handle(cmd).await {
        Ok(session) => {
            let response: SessionResponse = session.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /sessions?day=monday - Sessions of one day
pub async fn list_day_sessions(
    State(handlers): State<ScheduleHandlers>,
    Query(params): Query<DayScheduleParams>,
) -> Response {
    let query = GetDayScheduleQuery { day: params.day };

    match handlers.day_handler.handle(query).await {
        Ok(schedule) => {
            let response: DayScheduleResponse = schedule.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /sessions/:day/:time - Session booked at one slot
pub async fn get_session_at(
    State(handlers): State<ScheduleHandlers>,
    Path((day, time)): Path<(String, String)>,
) -> Response {
    let query = GetSessionAtQuery {
        day: day.clone(),
        time: time.clone(),
    };

    match handlers.slot_handler.handle(query).await {
        Ok(Some(session)) => {
            let response: SessionResponse = session.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &format!("{} {}", day, time))),
        )
            .into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /slots - Visible grid rows
pub async fn list_time_slots(State(handlers): State<ScheduleHandlers>) -> Response {
    match handlers.time_slots_handler.handle().await {
        Ok(slots) => {
            let response: Vec<String> = slots.iter().map(ToString::to_string).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /grid - Calendar grid of a week
pub async fn get_week_grid(
    State(handlers): State<ScheduleHandlers>,
    Query(params): Query<WeekGridParams>,
) -> Response {
    let query = match grid_query(params) {
        Ok(query) => query,
        Err(e) => return handle_schedule_error(e),
    };

    match handlers.grid_handler.handle(query).await {
        Ok(grid) => (StatusCode::OK, Json(grid)).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

fn grid_query(params: WeekGridParams) -> Result<GetWeekGridQuery, ScheduleError> {
    let view = params
        .view
        .as_deref()
        .map(str::parse::<ViewMode>)
        .transpose()?
        .unwrap_or_default();
    let focus_day = params
        .day
        .as_deref()
        .map(str::parse::<Weekday>)
        .transpose()?;

    Ok(GetWeekGridQuery {
        reference_date: params.date,
        week_offset: params.offset.unwrap_or(0),
        view,
        focus_day,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn error_status(error: &ScheduleError) -> StatusCode {
    match error {
        ScheduleError::InvalidDay(_)
        | ScheduleError::InvalidTime(_)
        | ScheduleError::InvalidStatus(_)
        | ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
        ScheduleError::SlotConflict { .. } | ScheduleError::DuplicateId(_) => StatusCode::CONFLICT,
        ScheduleError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_schedule_error(error: ScheduleError) -> Response {
    let status = error_status(&error);
    let body = match &error {
        ScheduleError::Infrastructure(msg) => {
            tracing::error!("Schedule request failed: {}", msg);
            ErrorResponse::internal("Internal error")
        }
        other => ErrorResponse::from(other),
    };
    (status, Json(body)).into_response()
}
