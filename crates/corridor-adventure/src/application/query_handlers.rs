//! Query handlers for adventure runs.
//!
//! This module contains query handlers that reconstitute the run from stored
//! events and return read-only view DTOs.

use corridor_core::error::DomainError;
use corridor_core::repository::EventRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::cue::PendingCue;
use crate::domain::narration;
use crate::domain::player::PlayerState;
use crate::domain::scene::{ActionKind, Ending, Scene};

/// Read-only view of an adventure run.
#[derive(Debug, Serialize)]
pub struct AdventureRunView {
    /// The run identifier.
    pub run_id: Uuid,
    /// The scene on screen.
    pub scene: Scene,
    /// Text shown for the scene.
    pub description: String,
    pub player: PlayerState,
    /// Inventory panel lines.
    pub inventory: Vec<String>,
    /// Journal lines since the game started.
    pub narration: Vec<String>,
    /// Set while a cinematic is playing.
    pub pending_cue: Option<PendingCue>,
    /// Buttons the scene offers. Empty while a cinematic is playing.
    pub available_actions: Vec<ActionKind>,
    pub ending: Option<Ending>,
    /// Current version (event count).
    pub version: i64,
}

/// Retrieves a run by its aggregate ID.
///
/// The view reflects stored state only; cues that have come due are not
/// fired until the next command.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub async fn get_run_by_id(
    run_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<AdventureRunView, DomainError> {
    let run = command_handlers::load_run(run_id, repo).await?;
    let scene = run.scene();
    let player = run.player();
    let available_actions = if run.pending_cue().is_some() {
        Vec::new()
    } else {
        scene.available_actions(player)
    };
    Ok(AdventureRunView {
        run_id,
        scene,
        description: narration::describe(scene, player),
        player: player.clone(),
        inventory: player.inventory().lines(),
        narration: run.narration().to_vec(),
        pending_cue: run.pending_cue(),
        available_actions,
        ending: run.ending(),
        version: run.version,
    })
}
