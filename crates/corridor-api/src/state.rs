//! Shared application state.

use std::sync::Arc;

use corridor_adventure::domain::assets::AssetCatalog;
use corridor_adventure::domain::cue::CueTimings;
use corridor_core::clock::Clock;
use corridor_core::repository::EventRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for event timestamps and cue deadlines.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Cinematic hold times.
    pub timings: CueTimings,
    /// Event store for all runs.
    pub event_repository: Arc<dyn EventRepository>,
    /// Media lookup for scene backgrounds and tracks.
    pub assets: Arc<dyn AssetCatalog>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        timings: CueTimings,
        event_repository: Arc<dyn EventRepository>,
        assets: Arc<dyn AssetCatalog>,
    ) -> Self {
        Self {
            clock,
            timings,
            event_repository,
            assets,
        }
    }
}
