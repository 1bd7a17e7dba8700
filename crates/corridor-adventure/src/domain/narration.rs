//! Story text: scene descriptions, journal lines and the lock stanza.

use super::player::PlayerState;
use super::scene::{DeathStage, EscapeStage, Scene};

pub const TITLE_PROMPT: &str = "Enter your name and step into the Case.";

pub const CREDITS: &str = "Corridor Adventure\n\
    Group : 13\n\n\
    Created by:\n  \
    Andria (Coding, Group-Leader)\n  \
    Adil (Coding, Puzzles)\n  \
    Felix (Coding, Idea & Images)\n  \
    Anusree (Coding, Game Plot)\n\n\
    Thanks to: \"Empty cups of coffee everywhere\"";

pub const WALKTHROUGH: &str = "Walkthrough:\n\
    1. Enter your name and wake with the magnifying glass.\n\
    2. Take the pendant in the mansion hall to carry it (shows Life value).\n\
    3. Solve: Room 1 -> O, Storage -> C, Study -> K.\n\
    4. Death Ending: wrong answers or trying South early lower the Life value on the \
    pendant. When it reaches zero you will be swallowed by darkness.\n\
    5. Escape Ending: gather O C K to escape through South. To see another sunrise.";

pub const MANSION_IN: &str = "You step through a heavy door into the faded grandeur of the hall. \
    Cobwebs cling to carved bannisters and dust motes spin in the slanting light.\n\n\
    You search the room - drawers, mantle, and a narrow table - and at last your fingers close \
    around a small, scarred pendant. It sits quiet and cold, yet somehow it feels alive, as if it \
    were calling your name.";

pub const PENDANT_TAKEN: &str = "As you take and admire the Pendant a sharp pain hits your skull. \
    You clutch your head, but everything fades and you awaken in a dark corridor.";

pub const HALLWAY: &str = "A narrow corridor stretches out, lit by a single flickering bulb. \
    Doors await north, east, and west. South, a heavy iron door bristles with ancient locks.";

pub const PUZZLE_FAILED: &str = "The pendant grows colder. You steel yourself to try again.";

pub const PUZZLE_CHILL: &str = "A chill runs through you as the puzzle slips away...";

pub const DOOR_PULL: &str = "You press your hand to the heavy southern door and pull. \
    It resists with centuries of rust.";

pub const DOOR_RESISTS: &str = "Shadows creep along the lock's seam, a cold breath exhaling \
    from the iron. The mechanism resists.";

pub const DOOR_ACCEPTS: &str = "You assemble the letters and press them into the dial. \
    The mechanism accepts them with a shudder.";

pub const DEATH_SHUDDER: &str = "A sudden shudder runs through the chamber.";

pub const DEATH_SHADOWS: &str = "Shadows rise like a tide, swallowing every inch of light.";

pub const DEATH_FINAL: &str = "The door never opens. The mansion exhales its last breath, and \
    you are swallowed in silence...\n\n--- Ending: Death ---";

pub const ESCAPE_LIGHT: &str =
    "Light floods the corridor. The heavy lock surrenders with an anguished groan.";

pub const ESCAPE_FINAL: &str = "You step out onto cold, wet grass. The mansion shrinks behind \
    you.\n\n--- Ending: Escape ---";

pub const EXITED: &str = "The mansion falls quiet behind you.";

/// Opening journal line for a new game.
#[must_use]
pub fn introduction(name: &str) -> String {
    format!("You are {name}, a world-class detective who doesn't let mysteries rest.")
}

/// What the pendant looks like when inspected.
#[must_use]
pub fn pendant_inspection(lives: u8) -> String {
    format!(
        "You study the pendant: the back bears a carved 'L'. The front is a dial currently \
         reading {lives}."
    )
}

/// The ticking pendant's verse after a life is lost.
///
/// `reading` is the number the dial now shows. `omen` selects the flavor
/// line and, at zero, the closing verse. The corridor door keys it on the
/// count before the loss, so the closing verse only follows a puzzle.
#[must_use]
pub fn lock_stanza(reading: u8, omen: u8) -> Vec<String> {
    let mut lines = vec![
        "The cursed lock begins ticking...".to_owned(),
        format!("The number shifts: {reading}"),
    ];
    match omen {
        3 => lines.push("A shadow flickers at the edge of your vision.".to_owned()),
        2 => lines.push("You hear footsteps behind you, drawing closer...".to_owned()),
        1 => lines.push("A whisper breathes your name. Your skin turns cold.".to_owned()),
        _ => {}
    }
    if omen == 0 {
        lines.extend(
            [
                "The lock clicks to zero.",
                "The shadows rise like a tide, swallowing every inch of light.",
                "You are trapped eternally, consumed by the darkness...",
            ]
            .map(str::to_owned),
        );
    }
    lines
}

/// The text shown for a scene.
#[must_use]
pub fn describe(scene: Scene, player: &PlayerState) -> String {
    match scene {
        Scene::Title => TITLE_PROMPT.to_owned(),
        Scene::Credits => CREDITS.to_owned(),
        Scene::Walkthrough => WALKTHROUGH.to_owned(),
        Scene::MansionOut => format!(
            "{} - a world-class detective. Rain beads on your collar and the house stares back \
             with blind windows. You have come following the trail of numerous missing cases - \
             names and faces that never found their way home.\n\n\
             A magnifying glass sits in your pocket, a small, stubborn proof that you won't leave \
             a question unanswered. The mansion's stonework is pitted and patient; shutters \
             rattle with the sighs of rooms that remember.",
            player.name
        ),
        Scene::MansionIn => MANSION_IN.to_owned(),
        Scene::PendantTaken => PENDANT_TAKEN.to_owned(),
        Scene::Blackout | Scene::Death(DeathStage::Blackout) => String::new(),
        Scene::Hallway => HALLWAY.to_owned(),
        Scene::PuzzleRoom(room) => room.description().to_owned(),
        Scene::PuzzleFailed(_) => PUZZLE_FAILED.to_owned(),
        Scene::SouthDoorAttempt => DOOR_PULL.to_owned(),
        Scene::SouthDoorResisted => DOOR_RESISTS.to_owned(),
        Scene::Death(DeathStage::Shudder) => DEATH_SHUDDER.to_owned(),
        Scene::Death(DeathStage::Shadows) => DEATH_SHADOWS.to_owned(),
        Scene::Death(DeathStage::Final) => DEATH_FINAL.to_owned(),
        Scene::Escape(EscapeStage::Light) => ESCAPE_LIGHT.to_owned(),
        Scene::Escape(EscapeStage::Final) => ESCAPE_FINAL.to_owned(),
        Scene::Exited => EXITED.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_stanza_with_lives_left() {
        let lines = lock_stanza(2, 3);

        assert_eq!(
            lines,
            vec![
                "The cursed lock begins ticking...",
                "The number shifts: 2",
                "A shadow flickers at the edge of your vision.",
            ]
        );
    }

    #[test]
    fn test_lock_stanza_at_zero_closes_the_verse() {
        let lines = lock_stanza(0, 0);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "The lock clicks to zero.");
        assert!(lines[4].contains("consumed by the darkness"));
    }

    #[test]
    fn test_lock_stanza_keyed_on_count_before_loss_skips_closing_verse() {
        let lines = lock_stanza(0, 1);

        assert_eq!(
            lines,
            vec![
                "The cursed lock begins ticking...",
                "The number shifts: 0",
                "A whisper breathes your name. Your skin turns cold.",
            ]
        );
    }

    #[test]
    fn test_mansion_out_description_uses_player_name() {
        let player = PlayerState::new("Ada");

        let text = describe(Scene::MansionOut, &player);

        assert!(text.starts_with("Ada - a world-class detective."));
    }

    #[test]
    fn test_endings_are_labelled() {
        let player = PlayerState::default();

        assert!(describe(Scene::Death(DeathStage::Final), &player).ends_with("--- Ending: Death ---"));
        assert!(
            describe(Scene::Escape(EscapeStage::Final), &player).ends_with("--- Ending: Escape ---")
        );
    }
}
