//! Command handlers for adventure runs.
//!
//! Each handler loads the run's stream, rebuilds the aggregate, executes the
//! command and appends whatever the aggregate recorded.

use corridor_core::aggregate::AggregateRoot;
use corridor_core::clock::Clock;
use corridor_core::command::Command;
use corridor_core::error::DomainError;
use corridor_core::repository::{EventRepository, StoredEvent};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::aggregates::AdventureRun;
use crate::domain::commands::{AdvanceCues, OpenRun, PerformAction};
use crate::domain::cue::CueTimings;
use crate::domain::events::{AdventureEvent, AdventureEventKind};

/// What a command handler persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AdventureCommandResult {
    /// The run the events belong to.
    pub run_id: Uuid,
    /// Events appended by this command, in order. Empty when nothing changed.
    pub stored_events: Vec<StoredEvent>,
}

/// Reconstitutes an `AdventureRun` from stored events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub(crate) fn reconstitute(
    run_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<AdventureRun, DomainError> {
    let mut run = AdventureRun::new(run_id);
    for stored in existing_events {
        let kind: AdventureEventKind =
            serde_json::from_value(stored.payload.clone()).map_err(|e| {
                DomainError::Infrastructure(format!("event deserialization failed: {e}"))
            })?;
        run.apply(&AdventureEvent {
            metadata: stored.metadata(),
            kind,
        });
    }
    Ok(run)
}

/// Loads a run that must already exist.
pub(crate) async fn load_run(
    run_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<AdventureRun, DomainError> {
    let existing_events = repo.load_events(run_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(run_id));
    }
    reconstitute(run_id, &existing_events)
}

async fn commit(
    run: &mut AdventureRun,
    repo: &dyn EventRepository,
) -> Result<AdventureCommandResult, DomainError> {
    let stored_events: Vec<StoredEvent> = run
        .uncommitted_events()
        .iter()
        .map(StoredEvent::from_event)
        .collect();

    if !stored_events.is_empty() {
        repo.append_events(run.id, run.version(), &stored_events)
            .await?;
    }
    run.clear_uncommitted_events();

    Ok(AdventureCommandResult {
        run_id: run.id,
        stored_events,
    })
}

/// Handles the `OpenRun` command: creates a run on the title screen.
///
/// # Errors
///
/// Returns `DomainError` if appending fails.
pub async fn handle_open_run(
    command: &OpenRun,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<AdventureCommandResult, DomainError> {
    let mut run = AdventureRun::new(Uuid::new_v4());
    run.open(command.correlation_id(), clock);

    let result = commit(&mut run, repo).await?;
    info!(
        run_id = %result.run_id,
        command = command.command_type(),
        "run opened"
    );
    Ok(result)
}

/// Handles the `PerformAction` command: fires due cues, then applies the
/// player's action.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if the run does not exist,
/// `DomainError::Validation` if the action is not accepted right now, or
/// any error from loading or appending events.
pub async fn handle_perform_action(
    command: &PerformAction,
    clock: &dyn Clock,
    timings: &CueTimings,
    repo: &dyn EventRepository,
) -> Result<AdventureCommandResult, DomainError> {
    let mut run = load_run(command.run_id, repo).await?;
    let action_kind = command.action.kind();

    run.perform(
        command.action.clone(),
        command.correlation_id(),
        clock,
        timings,
    )?;

    let result = commit(&mut run, repo).await?;
    info!(
        run_id = %result.run_id,
        command = command.command_type(),
        action = %action_kind,
        scene = %run.scene(),
        events = result.stored_events.len(),
        "action performed"
    );
    Ok(result)
}

/// Handles the `AdvanceCues` command: fires every cue that has come due.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if the run does not exist, or
/// any error from loading or appending events.
pub async fn handle_advance_cues(
    command: &AdvanceCues,
    clock: &dyn Clock,
    timings: &CueTimings,
    repo: &dyn EventRepository,
) -> Result<AdventureCommandResult, DomainError> {
    let mut run = load_run(command.run_id, repo).await?;

    let fired = run.fire_due_cues(command.correlation_id(), clock, timings);

    let result = commit(&mut run, repo).await?;
    debug!(
        run_id = %result.run_id,
        command = command.command_type(),
        fired,
        scene = %run.scene(),
        "cues advanced"
    );
    Ok(result)
}
