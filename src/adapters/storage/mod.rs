//! Storage Adapters
//!
//! Implementations of the schedule ports.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Holds the weekly schedule in memory
//! - **FileSeedSource** - Reads seed sessions from a YAML or JSON file
//! - **StaticSeedSource** - Built-in sample week
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSeedSource, InMemorySessionRepository};
//!
//! let records = FileSeedSource::new("./data/week.yaml").load().await?;
//! let repo = InMemorySessionRepository::from_records(SlotGrid::default(), records)?;
//! ```

mod file_seed_source;
mod in_memory_session_repository;
mod static_seed_source;

pub use file_seed_source::FileSeedSource;
pub use in_memory_session_repository::InMemorySessionRepository;
pub use static_seed_source::StaticSeedSource;
