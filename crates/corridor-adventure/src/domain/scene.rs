//! Scenes, player actions, and which actions each scene accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerState;
use super::puzzle::Room;

/// Stages of the death cinematic, in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathStage {
    Shudder,
    Blackout,
    Shadows,
    Final,
}

/// Stages of the escape cinematic, in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeStage {
    Light,
    Final,
}

/// The two ways a run can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Death,
    Escape,
}

/// A named screen of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Title,
    Credits,
    Walkthrough,
    MansionOut,
    MansionIn,
    /// Pain and fading vision after taking the pendant.
    PendantTaken,
    /// Black screen between the mansion hall and the corridor.
    Blackout,
    Hallway,
    PuzzleRoom(Room),
    /// Failure message shown over the room before retrying it.
    PuzzleFailed(Room),
    SouthDoorAttempt,
    /// The lock refused; the pendant ticks down.
    SouthDoorResisted,
    Death(DeathStage),
    Escape(EscapeStage),
    /// The player closed the game from an ending screen.
    Exited,
}

/// How long a cinematic scene holds before its cue fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueLength {
    Medium,
    Long,
    DeathBlackout,
}

impl Scene {
    /// `Some` for cinematic scenes, which advance on a timer and accept no
    /// player actions.
    #[must_use]
    pub fn cue_length(self) -> Option<CueLength> {
        match self {
            Self::PendantTaken
            | Self::Death(DeathStage::Shudder | DeathStage::Shadows)
            | Self::Escape(EscapeStage::Light) => Some(CueLength::Long),
            Self::Blackout
            | Self::PuzzleFailed(_)
            | Self::SouthDoorAttempt
            | Self::SouthDoorResisted => Some(CueLength::Medium),
            Self::Death(DeathStage::Blackout) => Some(CueLength::DeathBlackout),
            Self::Title
            | Self::Credits
            | Self::Walkthrough
            | Self::MansionOut
            | Self::MansionIn
            | Self::Hallway
            | Self::PuzzleRoom(_)
            | Self::Death(DeathStage::Final)
            | Self::Escape(EscapeStage::Final)
            | Self::Exited => None,
        }
    }

    #[must_use]
    pub fn is_cinematic(self) -> bool {
        self.cue_length().is_some()
    }

    /// Actions the scene accepts given the player's state.
    #[must_use]
    pub fn available_actions(self, player: &PlayerState) -> Vec<ActionKind> {
        match self {
            Self::Title => vec![
                ActionKind::StartGame,
                ActionKind::ShowCredits,
                ActionKind::ShowWalkthrough,
            ],
            Self::Credits | Self::Walkthrough => vec![ActionKind::Back],
            Self::MansionOut => vec![ActionKind::ApproachMansion],
            Self::MansionIn if player.pendant_taken => vec![ActionKind::InspectPendant],
            Self::MansionIn => vec![ActionKind::InspectPendant, ActionKind::TakePendant],
            Self::Hallway => vec![ActionKind::EnterRoom, ActionKind::TrySouthDoor],
            Self::PuzzleRoom(_) if player.ended => vec![ActionKind::InspectRoom, ActionKind::Back],
            Self::PuzzleRoom(_) => vec![
                ActionKind::InspectRoom,
                ActionKind::Solve,
                ActionKind::Back,
            ],
            Self::Death(DeathStage::Final) | Self::Escape(EscapeStage::Final) => {
                vec![ActionKind::Restart, ActionKind::Exit]
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Credits => f.write_str("credits"),
            Self::Walkthrough => f.write_str("walkthrough"),
            Self::MansionOut => f.write_str("mansion (outside)"),
            Self::MansionIn => f.write_str("mansion (inside)"),
            Self::PendantTaken => f.write_str("pendant taken"),
            Self::Blackout => f.write_str("blackout"),
            Self::Hallway => f.write_str("hallway"),
            Self::PuzzleRoom(room) => write!(f, "puzzle room ({room})"),
            Self::PuzzleFailed(room) => write!(f, "puzzle failed ({room})"),
            Self::SouthDoorAttempt => f.write_str("south door"),
            Self::SouthDoorResisted => f.write_str("south door (resisted)"),
            Self::Death(stage) => write!(f, "death ({stage:?})"),
            Self::Escape(stage) => write!(f, "escape ({stage:?})"),
            Self::Exited => f.write_str("exited"),
        }
    }
}

/// A button press from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    StartGame {
        #[serde(default)]
        name: String,
    },
    ShowCredits,
    ShowWalkthrough,
    Back,
    ApproachMansion,
    InspectPendant,
    TakePendant,
    EnterRoom {
        room: Room,
    },
    InspectRoom,
    Solve {
        /// `None` when the player dismissed the prompt.
        #[serde(default)]
        answer: Option<String>,
    },
    TrySouthDoor,
    /// "Retry" after death, "Restart" after escaping.
    Restart,
    Exit,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::StartGame { .. } => ActionKind::StartGame,
            Self::ShowCredits => ActionKind::ShowCredits,
            Self::ShowWalkthrough => ActionKind::ShowWalkthrough,
            Self::Back => ActionKind::Back,
            Self::ApproachMansion => ActionKind::ApproachMansion,
            Self::InspectPendant => ActionKind::InspectPendant,
            Self::TakePendant => ActionKind::TakePendant,
            Self::EnterRoom { .. } => ActionKind::EnterRoom,
            Self::InspectRoom => ActionKind::InspectRoom,
            Self::Solve { .. } => ActionKind::Solve,
            Self::TrySouthDoor => ActionKind::TrySouthDoor,
            Self::Restart => ActionKind::Restart,
            Self::Exit => ActionKind::Exit,
        }
    }
}

/// An [`Action`] without its payload, for listing buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    StartGame,
    ShowCredits,
    ShowWalkthrough,
    Back,
    ApproachMansion,
    InspectPendant,
    TakePendant,
    EnterRoom,
    InspectRoom,
    Solve,
    TrySouthDoor,
    Restart,
    Exit,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartGame => "start_game",
            Self::ShowCredits => "show_credits",
            Self::ShowWalkthrough => "show_walkthrough",
            Self::Back => "back",
            Self::ApproachMansion => "approach_mansion",
            Self::InspectPendant => "inspect_pendant",
            Self::TakePendant => "take_pendant",
            Self::EnterRoom => "enter_room",
            Self::InspectRoom => "inspect_room",
            Self::Solve => "solve",
            Self::TrySouthDoor => "try_south_door",
            Self::Restart => "restart",
            Self::Exit => "exit",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cinematic_scenes_accept_no_actions() {
        let player = PlayerState::new("Ada");
        let cinematics = [
            Scene::PendantTaken,
            Scene::Blackout,
            Scene::PuzzleFailed(Room::Study),
            Scene::SouthDoorAttempt,
            Scene::SouthDoorResisted,
            Scene::Death(DeathStage::Shudder),
            Scene::Death(DeathStage::Blackout),
            Scene::Death(DeathStage::Shadows),
            Scene::Escape(EscapeStage::Light),
        ];

        for scene in cinematics {
            assert!(scene.is_cinematic(), "{scene} should be cinematic");
            assert!(scene.available_actions(&player).is_empty());
        }
    }

    #[test]
    fn test_ending_screens_offer_restart_and_exit() {
        let player = PlayerState::new("Ada");

        for scene in [Scene::Death(DeathStage::Final), Scene::Escape(EscapeStage::Final)] {
            assert!(!scene.is_cinematic());
            assert_eq!(
                scene.available_actions(&player),
                vec![ActionKind::Restart, ActionKind::Exit]
            );
        }
    }

    #[test]
    fn test_take_pendant_disappears_once_taken() {
        let mut player = PlayerState::new("Ada");
        assert!(Scene::MansionIn
            .available_actions(&player)
            .contains(&ActionKind::TakePendant));

        player.pendant_taken = true;

        assert!(!Scene::MansionIn
            .available_actions(&player)
            .contains(&ActionKind::TakePendant));
    }

    #[test]
    fn test_action_deserializes_from_tagged_json() {
        let enter: Action =
            serde_json::from_value(serde_json::json!({ "action": "enter_room", "room": "storage" }))
                .unwrap();
        let solve: Action =
            serde_json::from_value(serde_json::json!({ "action": "solve" })).unwrap();

        assert_eq!(enter, Action::EnterRoom { room: Room::Storage });
        assert_eq!(solve, Action::Solve { answer: None });
    }

    #[test]
    fn test_action_kind_display_matches_serde_tag() {
        let action = Action::TrySouthDoor;
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["action"], action.kind().to_string());
    }
}
