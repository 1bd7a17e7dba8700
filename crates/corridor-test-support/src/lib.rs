//! Shared test mocks and utilities for the Corridor Adventure game.

mod clock;
mod repository;

pub use clock::{FixedClock, SteppingClock};
pub use repository::{EmptyEventRepository, FailingEventRepository, RecordingEventRepository};
