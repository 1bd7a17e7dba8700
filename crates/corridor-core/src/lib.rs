//! Corridor Core: shared domain abstractions.
//!
//! Traits and types the game crates build on: aggregates, events, commands,
//! the clock that drives timed cues, and the event repository seam. Nothing
//! in here knows about scenes or HTTP.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod repository;
