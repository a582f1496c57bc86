//! Session Calendar - weekly scheduling of therapy and consultation sessions
//!
//! This crate models a Monday-to-Friday booking grid: sessions are indexed
//! by `(day, time)` slot, double bookings are rejected, and per-day,
//! per-slot and whole-week queries feed whatever renders the calendar.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
