//! HTTP adapters - REST API implementations.

pub mod schedule;

pub use schedule::{schedule_routes, ScheduleHandlers};
