//! Which images and audio each scene asks for.
//!
//! The game never loads media itself. It names what a scene wants and asks an
//! [`AssetCatalog`] what actually exists; anything missing is skipped.

use serde::{Deserialize, Serialize};

use super::puzzle::Room;
use super::scene::{DeathStage, EscapeStage, Scene};

/// Looping audio slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Title, credits, walkthrough, corridor and rooms.
    Area,
    MansionOut,
    MansionIn,
    SouthDoor,
    Death,
    Escape,
    /// Blackouts and failures.
    Tension,
}

impl Track {
    /// File stem without extension.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Area => "sound_1",
            Self::MansionOut => "sound_2",
            Self::MansionIn => "sound_3",
            Self::SouthDoor => "sound_4",
            Self::Death => "sound_5",
            Self::Escape => "sound_6",
            Self::Tension => "sound_7",
        }
    }
}

/// Background images to try for a scene, most preferred first.
#[must_use]
pub fn background_candidates(scene: Scene) -> &'static [&'static str] {
    match scene {
        Scene::Title => &["title.jpg"],
        Scene::MansionOut
        | Scene::Death(DeathStage::Final)
        | Scene::Escape(EscapeStage::Final) => &["mansion_out.jpg"],
        Scene::MansionIn | Scene::PendantTaken => &["mansion_in.jpg"],
        Scene::Hallway => &["hallway.jpg"],
        Scene::PuzzleRoom(room) | Scene::PuzzleFailed(room) => match room {
            Room::Room1 => &["room_1.jpg"],
            Room::Storage => &["storage.jpg"],
            Room::Study => &["study.jpg"],
        },
        Scene::SouthDoorAttempt | Scene::SouthDoorResisted => {
            &["exit.jpg", "exit.png", "mansion_out.jpg"]
        }
        Scene::Death(DeathStage::Shudder) => &["exit_2.jpg", "shadow.png"],
        Scene::Death(DeathStage::Shadows) => &["shadows.png"],
        Scene::Escape(EscapeStage::Light) => &["escape.jpg", "escape.png"],
        Scene::Credits
        | Scene::Walkthrough
        | Scene::Blackout
        | Scene::Death(DeathStage::Blackout)
        | Scene::Exited => &[],
    }
}

/// The loop that should be playing while `scene` is shown.
#[must_use]
pub fn ambient_track(scene: Scene) -> Option<Track> {
    match scene {
        Scene::Title
        | Scene::Credits
        | Scene::Walkthrough
        | Scene::Hallway
        | Scene::PuzzleRoom(_) => Some(Track::Area),
        Scene::MansionOut => Some(Track::MansionOut),
        Scene::MansionIn => Some(Track::MansionIn),
        Scene::Blackout | Scene::PuzzleFailed(_) => Some(Track::Tension),
        Scene::SouthDoorAttempt | Scene::SouthDoorResisted => Some(Track::SouthDoor),
        Scene::Death(DeathStage::Shadows) => Some(Track::Death),
        Scene::Escape(EscapeStage::Light) => Some(Track::Escape),
        Scene::PendantTaken
        | Scene::Death(DeathStage::Shudder | DeathStage::Blackout | DeathStage::Final)
        | Scene::Escape(EscapeStage::Final)
        | Scene::Exited => None,
    }
}

/// Answers whether media exists. Implementations decide where to look.
pub trait AssetCatalog: Send + Sync {
    /// Whether the named image is available.
    fn has_image(&self, name: &str) -> bool;

    /// The playable file for a track, if any variant of it exists.
    fn track_file(&self, track: Track) -> Option<String>;
}

/// Media resolved for one scene; missing pieces are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneMedia {
    pub background: Option<&'static str>,
    pub track: Option<Track>,
    pub track_file: Option<String>,
}

/// Picks the first available background and the scene's track file.
pub fn resolve_media(scene: Scene, catalog: &dyn AssetCatalog) -> SceneMedia {
    let background = background_candidates(scene)
        .iter()
        .copied()
        .find(|name| catalog.has_image(name));
    let track = ambient_track(scene);
    SceneMedia {
        background,
        track,
        track_file: track.and_then(|t| catalog.track_file(t)),
    }
}
