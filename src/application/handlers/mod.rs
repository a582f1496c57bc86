//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod schedule;

pub use schedule::{
    BookSessionCommand, BookSessionHandler, DaySchedule, GetDayScheduleHandler,
    GetDayScheduleQuery, GetSessionAtHandler, GetSessionAtQuery, GetWeekGridHandler,
    GetWeekGridQuery, ListTimeSlotsHandler,
};
