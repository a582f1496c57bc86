//! HTTP routes for schedule endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    book_session, get_session_at, get_week_grid, health, list_day_sessions, list_time_slots,
    ScheduleHandlers,
};

/// Creates the schedule router with all endpoints.
pub fn schedule_routes(handlers: ScheduleHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", get(list_day_sessions).post(book_session))
        .route("/sessions/:day/:time", get(get_session_at))
        .route("/slots", get(list_time_slots))
        .route("/grid", get(get_week_grid))
        .with_state(handlers)
}
