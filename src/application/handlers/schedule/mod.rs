//! Schedule command and query handlers.

mod book_session;
mod get_day_schedule;
mod get_session_at;
mod get_week_grid;
mod list_time_slots;

pub use book_session::{BookSessionCommand, BookSessionHandler};
pub use get_day_schedule::{DaySchedule, GetDayScheduleHandler, GetDayScheduleQuery};
pub use get_session_at::{GetSessionAtHandler, GetSessionAtQuery};
pub use get_week_grid::{GetWeekGridHandler, GetWeekGridQuery};
pub use list_time_slots::ListTimeSlotsHandler;
