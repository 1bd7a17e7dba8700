//! Domain events for an adventure run.

use chrono::{DateTime, Utc};
use corridor_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cue::PendingCue;
use super::puzzle::{Letter, Room};
use super::scene::{Ending, Scene};

/// Emitted when a run is created on the title screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOpened {
    pub run_id: Uuid,
}

/// Emitted when the player presses Start; resets the player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStarted {
    pub player_name: String,
}

/// Emitted on every scene transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneChanged {
    pub from: Scene,
    pub to: Scene,
    /// Set when `to` is cinematic.
    pub cue: Option<PendingCue>,
}

/// Emitted when the pendant is picked up in the mansion hall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendantTaken {
    pub lives: u8,
}

/// Emitted when a puzzle is solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterCollected {
    pub room: Room,
    pub letter: Letter,
}

/// Why the pendant ticked down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeLossCause {
    WrongAnswer(Room),
    LockResisted,
}

/// Emitted when the pendant loses a life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeLost {
    pub cause: LifeLossCause,
    pub lives_remaining: u8,
}

/// Emitted when lines are added to the run's journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationLogged {
    pub lines: Vec<String>,
}

/// Emitted when a pending cue fires. Always followed by the transition it
/// causes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueFired {
    pub scene: Scene,
    pub due_at: DateTime<Utc>,
}

/// Emitted when an ending sequence begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndingReached {
    pub ending: Ending,
}

/// Event type identifier for [`RunOpened`].
pub const RUN_OPENED_EVENT_TYPE: &str = "adventure.run_opened";

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "adventure.game_started";

/// Event type identifier for [`SceneChanged`].
pub const SCENE_CHANGED_EVENT_TYPE: &str = "adventure.scene_changed";

/// Event type identifier for [`PendantTaken`].
pub const PENDANT_TAKEN_EVENT_TYPE: &str = "adventure.pendant_taken";

/// Event type identifier for [`LetterCollected`].
pub const LETTER_COLLECTED_EVENT_TYPE: &str = "adventure.letter_collected";

/// Event type identifier for [`LifeLost`].
pub const LIFE_LOST_EVENT_TYPE: &str = "adventure.life_lost";

/// Event type identifier for [`NarrationLogged`].
pub const NARRATION_LOGGED_EVENT_TYPE: &str = "adventure.narration_logged";

/// Event type identifier for [`CueFired`].
pub const CUE_FIRED_EVENT_TYPE: &str = "adventure.cue_fired";

/// Event type identifier for [`EndingReached`].
pub const ENDING_REACHED_EVENT_TYPE: &str = "adventure.ending_reached";

/// Event payload variants for an adventure run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdventureEventKind {
    RunOpened(RunOpened),
    GameStarted(GameStarted),
    SceneChanged(SceneChanged),
    PendantTaken(PendantTaken),
    LetterCollected(LetterCollected),
    LifeLost(LifeLost),
    NarrationLogged(NarrationLogged),
    CueFired(CueFired),
    EndingReached(EndingReached),
}

impl AdventureEventKind {
    /// Dotted type name of the payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::RunOpened(_) => RUN_OPENED_EVENT_TYPE,
            Self::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            Self::SceneChanged(_) => SCENE_CHANGED_EVENT_TYPE,
            Self::PendantTaken(_) => PENDANT_TAKEN_EVENT_TYPE,
            Self::LetterCollected(_) => LETTER_COLLECTED_EVENT_TYPE,
            Self::LifeLost(_) => LIFE_LOST_EVENT_TYPE,
            Self::NarrationLogged(_) => NARRATION_LOGGED_EVENT_TYPE,
            Self::CueFired(_) => CUE_FIRED_EVENT_TYPE,
            Self::EndingReached(_) => ENDING_REACHED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for an adventure run.
#[derive(Debug, Clone)]
pub struct AdventureEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: AdventureEventKind,
}

impl DomainEvent for AdventureEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("AdventureEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
