//! SessionStore - sessions of one week, indexed by slot.
//!
//! Sessions are kept in insertion order; a `(day, time)` index makes
//! `session_at` a hash lookup instead of a scan per grid cell. The store
//! itself is single-threaded. Shared use goes through
//! `InMemorySessionRepository`, which holds a write lock across `add`.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::SessionId;

use super::{ScheduleError, Session, SessionStatus, SlotGrid, SlotTime, Weekday};

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    grid: SlotGrid,
    sessions: Vec<Session>,
    by_slot: HashMap<(Weekday, SlotTime), usize>,
    ids: HashSet<SessionId>,
}

impl SessionStore {
    /// Creates an empty store over the given grid.
    pub fn new(grid: SlotGrid) -> Self {
        Self {
            grid,
            sessions: Vec::new(),
            by_slot: HashMap::new(),
            ids: HashSet::new(),
        }
    }

    /// Creates a store from a seed sequence, adding sessions in order.
    ///
    /// # Errors
    ///
    /// Fails on the first seed entry `add` would reject.
    pub fn from_seed<I>(grid: SlotGrid, seed: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = Session>,
    {
        let mut store = Self::new(grid);
        for session in seed {
            store.add(session)?;
        }
        Ok(store)
    }

    /// Rows of a grid running from `start_hour` to `end_hour` inclusive.
    ///
    /// # Errors
    ///
    /// - `Validation` if the range or step is invalid (see [`SlotGrid::new`])
    pub fn time_slots(
        start_hour: u8,
        end_hour: u8,
        step_minutes: u16,
    ) -> Result<Vec<SlotTime>, ScheduleError> {
        Ok(SlotGrid::new(start_hour, end_hour, step_minutes)?.time_slots())
    }

    /// Books a session.
    ///
    /// # Errors
    ///
    /// - `InvalidTime` if the time is not a row of this store's grid
    /// - `SlotConflict` if the slot is already booked
    /// - `DuplicateId` if the id is already used
    ///
    /// The store is unchanged when an error is returned.
    pub fn add(&mut self, session: Session) -> Result<(), ScheduleError> {
        self.grid.check(session.time())?;

        let slot = session.slot();
        if self.by_slot.contains_key(&slot) {
            return Err(ScheduleError::slot_conflict(slot.0, slot.1));
        }
        if self.ids.contains(&session.id()) {
            return Err(ScheduleError::DuplicateId(session.id()));
        }

        self.by_slot.insert(slot, self.sessions.len());
        self.ids.insert(session.id());
        self.sessions.push(session);
        Ok(())
    }

    /// Sessions on `day` in insertion order.
    pub fn sessions_for_day(&self, day: Weekday) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.day() == day).collect()
    }

    /// Like [`sessions_for_day`](Self::sessions_for_day) for an untyped day key.
    ///
    /// # Errors
    ///
    /// - `InvalidDay` if `day` is not one of the five grid days
    pub fn sessions_for_day_str(&self, day: &str) -> Result<Vec<&Session>, ScheduleError> {
        Ok(self.sessions_for_day(day.parse()?))
    }

    /// The session booked at exactly `(day, time)`, if any.
    pub fn session_at(&self, day: Weekday, time: SlotTime) -> Option<&Session> {
        self.by_slot
            .get(&(day, time))
            .and_then(|&index| self.sessions.get(index))
    }

    /// True if `(day, time)` is booked.
    pub fn is_booked(&self, day: Weekday, time: SlotTime) -> bool {
        self.by_slot.contains_key(&(day, time))
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// All sessions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn count_by_status(&self, status: SessionStatus) -> usize {
        self.sessions.iter().filter(|s| s.status() == status).count()
    }
}
