//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `schedule` - Weekly grid, sessions, the session store and its projections

pub mod foundation;
pub mod schedule;
