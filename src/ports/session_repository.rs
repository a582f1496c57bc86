//! Session repository port.
//!
//! Defines the contract for booking sessions and querying the weekly
//! schedule. Implementations own the `SessionStore` and decide how access
//! to it is shared.
//!
//! # Design
//!
//! - **Atomic booking**: `add` must check and insert as one critical section,
//!   so two concurrent requests for the same slot cannot both succeed
//! - **Owned results**: queries return clones so no lock outlives the call

use async_trait::async_trait;

use crate::domain::schedule::{ScheduleError, Session, SessionStore, SlotGrid, SlotTime, Weekday};

/// Repository port for the weekly schedule.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Book a session.
    ///
    /// # Errors
    ///
    /// - `InvalidTime` if the time is not a grid row
    /// - `SlotConflict` if the slot is taken
    /// - `DuplicateId` if the id is taken
    async fn add(&self, session: Session) -> Result<(), ScheduleError>;

    /// Sessions on `day` in booking order.
    async fn sessions_for_day(&self, day: Weekday) -> Result<Vec<Session>, ScheduleError>;

    /// The session at exactly `(day, time)`.
    async fn session_at(
        &self,
        day: Weekday,
        time: SlotTime,
    ) -> Result<Option<Session>, ScheduleError>;

    /// Every session in booking order.
    async fn all(&self) -> Result<Vec<Session>, ScheduleError>;

    /// Number of booked sessions.
    async fn count(&self) -> Result<usize, ScheduleError>;

    /// The visible grid sessions are validated against.
    async fn grid(&self) -> Result<SlotGrid, ScheduleError>;

    /// A copy of the grid and every session, taken in one read.
    async fn snapshot(&self) -> Result<SessionStore, ScheduleError>;
}
