//! Schedule domain module.
//!
//! Weekly grid of bookable slots (Monday to Friday, configurable hours) and
//! the sessions booked into them.
//!
//! # Invariants
//!
//! - At most one session per `(day, time)` slot
//! - Every session time is a row of the store's `SlotGrid`
//! - Session ids are unique within a store

mod errors;
mod grid;
mod session;
mod slot_grid;
mod slot_time;
mod status;
mod store;
mod week;
mod weekday;

pub use errors::ScheduleError;
pub use grid::{CellSession, GridColumn, GridRow, ViewMode, WeekGrid};
pub use session::{Session, SessionRecord, MAX_DURATION_MINUTES};
pub use slot_grid::SlotGrid;
pub use slot_time::SlotTime;
pub use status::SessionStatus;
pub use store::SessionStore;
pub use week::Week;
pub use weekday::Weekday;
