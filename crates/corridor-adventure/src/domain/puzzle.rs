//! The three puzzle rooms and the letters they guard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A collectible letter. Together they spell the lock's combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    /// Guarded by Room 1.
    O,
    /// Guarded by the storage room.
    C,
    /// Guarded by the study.
    K,
}

impl Letter {
    /// Every letter the south door needs.
    pub const ALL: [Self; 3] = [Self::O, Self::C, Self::K];

    /// The letter as typed by the player.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::C => "C",
            Self::K => "K",
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::O => 'O',
            Self::C => 'C',
            Self::K => 'K',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A puzzle room off the corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    /// North of the corridor.
    Room1,
    /// East of the corridor.
    Storage,
    /// West of the corridor.
    Study,
}

impl Room {
    /// All rooms, in corridor order.
    pub const ALL: [Self; 3] = [Self::Room1, Self::Storage, Self::Study];

    /// The letter this room yields when solved.
    #[must_use]
    pub fn letter(self) -> Letter {
        match self {
            Self::Room1 => Letter::O,
            Self::Storage => Letter::C,
            Self::Study => Letter::K,
        }
    }

    /// The riddle put to the player on "Solve".
    #[must_use]
    pub fn riddle(self) -> &'static str {
        match self {
            Self::Room1 => {
                "'I appear round in moon and door. I am one complete circle. What letter am I?'"
            }
            Self::Storage => "'A crescent curve.' Type the single letter.",
            Self::Study => "'Silent in knife; starts knock.' Which letter?",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Room1 => {
                "Room 1 - a bare chamber with peeling wallpaper. On a crooked table rests a \
                 puzzle box, its carvings forming strange circles."
            }
            Self::Storage => {
                "Storage - cracked crates and warped shelves. Something metallic glints \
                 between the debris."
            }
            Self::Study => {
                "Study - shelves sag beneath moldy tomes. A desk with a locked drawer hums \
                 faintly."
            }
        }
    }

    #[must_use]
    pub fn inspect_hint(self) -> &'static str {
        match self {
            Self::Room1 => {
                "Your fingers trace a circle pattern on the floor; one tile is subtly different."
            }
            Self::Storage => "A jar wobbles loose. Behind it a crescent chip glints faintly.",
            Self::Study => {
                "The drawer hums faintly; the carved pattern hints at a single consonant."
            }
        }
    }

    #[must_use]
    pub fn success_line(self) -> &'static str {
        match self {
            Self::Room1 => "Correct. The tile yields the letter 'O'.",
            Self::Storage => "Correct. You find the letter 'C'.",
            Self::Study => "Correct. The drawer reveals 'K'.",
        }
    }

    #[must_use]
    pub fn failure_line(self) -> &'static str {
        match self {
            Self::Room1 => "That's not right.",
            Self::Storage => "Nothing happens.",
            Self::Study => "The clue resists you.",
        }
    }

    #[must_use]
    pub fn already_solved_line(self) -> &'static str {
        match self {
            Self::Room1 => "You've already solved this.",
            Self::Storage => "Storage puzzle already solved.",
            Self::Study => "Study puzzle already solved.",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Room1 => "Room 1",
            Self::Storage => "Storage",
            Self::Study => "Study",
        })
    }
}

/// Checks a typed answer against the room's letter.
///
/// Surrounding whitespace is ignored and case does not matter, but the rest
/// must match exactly. A missing answer (the player cancelled the prompt)
/// is wrong.
#[must_use]
pub fn check_answer(room: Room, answer: Option<&str>) -> bool {
    answer
        .map(str::trim)
        .is_some_and(|typed| typed.eq_ignore_ascii_case(room.letter().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_room_yields_its_letter() {
        assert_eq!(Room::Room1.letter(), Letter::O);
        assert_eq!(Room::Storage.letter(), Letter::C);
        assert_eq!(Room::Study.letter(), Letter::K);
    }

    #[test]
    fn test_check_answer_ignores_case_and_whitespace() {
        assert!(check_answer(Room::Room1, Some("o")));
        assert!(check_answer(Room::Storage, Some("  C ")));
        assert!(check_answer(Room::Study, Some("k\n")));
    }

    #[test]
    fn test_check_answer_rejects_other_letters_and_words() {
        assert!(!check_answer(Room::Room1, Some("c")));
        assert!(!check_answer(Room::Room1, Some("oo")));
        assert!(!check_answer(Room::Study, Some("knock")));
        assert!(!check_answer(Room::Storage, Some("")));
    }

    #[test]
    fn test_check_answer_treats_cancelled_prompt_as_wrong() {
        assert!(!check_answer(Room::Room1, None));
    }

    #[test]
    fn test_room_serializes_as_snake_case() {
        let json = serde_json::to_value(Room::Room1).unwrap();

        assert_eq!(json, serde_json::json!("room1"));
    }
}
