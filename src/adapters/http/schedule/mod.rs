//! HTTP adapter for schedule endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BookSessionRequest, DayScheduleParams, DayScheduleResponse, ErrorResponse, SessionResponse,
    WeekGridParams,
};
pub use handlers::ScheduleHandlers;
pub use routes::schedule_routes;
