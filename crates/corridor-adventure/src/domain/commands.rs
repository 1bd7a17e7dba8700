//! Commands for an adventure run.

use corridor_core::command::Command;
use uuid::Uuid;

use super::scene::Action;

/// Command to open a new run on the title screen.
#[derive(Debug, Clone)]
pub struct OpenRun {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for OpenRun {
    fn command_type(&self) -> &'static str {
        "adventure.open_run"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying a button press from the player.
#[derive(Debug, Clone)]
pub struct PerformAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The run being played.
    pub run_id: Uuid,
    /// What the player pressed.
    pub action: Action,
}

impl Command for PerformAction {
    fn command_type(&self) -> &'static str {
        "adventure.perform_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to fire any cues that have come due.
#[derive(Debug, Clone)]
pub struct AdvanceCues {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The run being played.
    pub run_id: Uuid,
}

impl Command for AdvanceCues {
    fn command_type(&self) -> &'static str {
        "adventure.advance_cues"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
