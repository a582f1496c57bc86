//! In-Memory Session Repository Adapter
//!
//! Keeps the weekly schedule in a `SessionStore` behind an async `RwLock`.
//! Bookings take the write lock for the whole check-then-insert.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::schedule::{
    ScheduleError, Session, SessionRecord, SessionStore, SlotGrid, SlotTime, Weekday,
};
use crate::ports::{SeedSource, SessionRepository};

/// In-memory repository for the weekly schedule
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    store: Arc<RwLock<SessionStore>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository over `grid`
    pub fn new(grid: SlotGrid) -> Self {
        Self::from_store(SessionStore::new(grid))
    }

    /// Wrap an already populated store
    pub fn from_store(store: SessionStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Build a repository from seed records, validating each one
    ///
    /// # Errors
    /// Returns the first `ScheduleError` raised by a record
    pub fn from_records(
        grid: SlotGrid,
        records: Vec<SessionRecord>,
    ) -> Result<Self, ScheduleError> {
        let sessions = records
            .into_iter()
            .map(Session::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_store(SessionStore::from_seed(grid, sessions)?))
    }

    /// Load `source` and build a repository from its records
    ///
    /// # Errors
    /// `Infrastructure` when the source cannot be read, otherwise the first
    /// record error as in `from_records`
    pub async fn seeded(grid: SlotGrid, source: &dyn SeedSource) -> Result<Self, ScheduleError> {
        let records = source.load().await.map_err(|e| {
            let err = DomainError::from(e);
            tracing::error!(code = %err.code, details = ?err.details, "{}", err.message);
            err
        })?;
        tracing::debug!("Seeding schedule with {} records", records.len());
        Self::from_records(grid, records)
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new(SlotGrid::default())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn add(&self, session: Session) -> Result<(), ScheduleError> {
        self.store.write().await.add(session)
    }

    async fn sessions_for_day(&self, day: Weekday) -> Result<Vec<Session>, ScheduleError> {
        let store = self.store.read().await;
        Ok(store.sessions_for_day(day).into_iter().cloned().collect())
    }

    async fn session_at(
        &self,
        day: Weekday,
        time: SlotTime,
    ) -> Result<Option<Session>, ScheduleError> {
        Ok(self.store.read().await.session_at(day, time).cloned())
    }

    async fn all(&self) -> Result<Vec<Session>, ScheduleError> {
        Ok(self.store.read().await.iter().cloned().collect())
    }

    async fn count(&self) -> Result<usize, ScheduleError> {
        Ok(self.store.read().await.len())
    }

    async fn grid(&self) -> Result<SlotGrid, ScheduleError> {
        Ok(*self.store.read().await.grid())
    }

    async fn snapshot(&self) -> Result<SessionStore, ScheduleError> {
        Ok(self.store.read().await.clone())
    }
}
