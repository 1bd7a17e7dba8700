//! Corridor Adventure: event storage.
//!
//! Runs live only as long as the process; streams are kept in memory.

pub mod memory_event_repository;
