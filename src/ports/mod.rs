//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Booking and querying the weekly schedule
//! - `SeedSource` - Where the initial list of sessions comes from

mod seed_source;
mod session_repository;

pub use seed_source::{SeedSource, SeedSourceError};
pub use session_repository::SessionRepository;
