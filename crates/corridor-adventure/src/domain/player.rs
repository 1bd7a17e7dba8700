//! The detective's mutable state for one playthrough.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::puzzle::{Letter, Room};

/// Lives on the pendant dial at the start of a game.
pub const STARTING_LIVES: u8 = 3;

/// Name used when the player leaves the name field blank.
pub const DEFAULT_NAME: &str = "Detective";

/// Everything the scene machine reads and writes about the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    /// Pendant dial reading; never below zero.
    pub lives: u8,
    pub pendant_taken: bool,
    pub letters: BTreeSet<Letter>,
    pub solved: BTreeMap<Room, bool>,
    /// Set once either ending sequence begins.
    pub ended: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: String::new(),
            lives: STARTING_LIVES,
            pendant_taken: false,
            letters: BTreeSet::new(),
            solved: BTreeMap::new(),
            ended: false,
        }
    }
}

impl PlayerState {
    /// Fresh state for a new game.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Normalizes the name typed on the title screen.
    #[must_use]
    pub fn resolve_name(typed: &str) -> String {
        let trimmed = typed.trim();
        if trimmed.is_empty() {
            DEFAULT_NAME.to_owned()
        } else {
            trimmed.to_owned()
        }
    }

    #[must_use]
    pub fn has_all_letters(&self) -> bool {
        Letter::ALL.iter().all(|letter| self.letters.contains(letter))
    }

    #[must_use]
    pub fn is_solved(&self, room: Room) -> bool {
        self.solved.get(&room).copied().unwrap_or(false)
    }

    /// Lives left after one more failure.
    #[must_use]
    pub fn lives_after_loss(&self) -> u8 {
        self.lives.saturating_sub(1)
    }

    #[must_use]
    pub fn inventory(&self) -> InventoryView {
        let mut letters = vec![LetterSlot {
            letter: 'L',
            collected: self.pendant_taken,
        }];
        letters.extend(Letter::ALL.iter().map(|letter| LetterSlot {
            letter: letter.as_char(),
            collected: self.letters.contains(letter),
        }));

        InventoryView {
            magnifying_glass: true,
            pendant: self.pendant_taken.then_some(self.lives),
            letters,
        }
    }
}

/// One letter position on the inventory panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterSlot {
    pub letter: char,
    pub collected: bool,
}

/// What the inventory panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    /// The detective always carries it.
    pub magnifying_glass: bool,
    /// Dial reading, once the pendant is taken.
    pub pendant: Option<u8>,
    /// `L` (carved on the pendant) followed by O, C and K.
    pub letters: Vec<LetterSlot>,
}

impl InventoryView {
    /// Numbered panel lines, e.g. `2. Pendant (3)` or `4. O : _`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.letters.len());
        lines.push("1. Magnifying Glass".to_owned());
        lines.push(match self.pendant {
            Some(lives) => format!("2. Pendant ({lives})"),
            None => "2. Pendant (not taken)".to_owned(),
        });
        for (index, slot) in self.letters.iter().enumerate() {
            let shown = if slot.collected { slot.letter } else { '_' };
            lines.push(format!("{}. {} : {shown}", index + 3, slot.letter));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_defaults_blank_input() {
        assert_eq!(PlayerState::resolve_name(""), DEFAULT_NAME);
        assert_eq!(PlayerState::resolve_name("   "), DEFAULT_NAME);
        assert_eq!(PlayerState::resolve_name(" Ada "), "Ada");
    }

    #[test]
    fn test_new_state_has_full_pendant_and_no_letters() {
        let state = PlayerState::new("Ada");

        assert_eq!(state.lives, STARTING_LIVES);
        assert!(!state.pendant_taken);
        assert!(state.letters.is_empty());
        assert!(!state.ended);
        assert!(!state.is_solved(Room::Study));
    }

    #[test]
    fn test_lives_after_loss_saturates_at_zero() {
        let mut state = PlayerState::new("Ada");
        state.lives = 0;

        assert_eq!(state.lives_after_loss(), 0);
    }

    #[test]
    fn test_has_all_letters_requires_o_c_and_k() {
        let mut state = PlayerState::new("Ada");
        state.letters.insert(Letter::O);
        state.letters.insert(Letter::K);
        assert!(!state.has_all_letters());

        state.letters.insert(Letter::C);
        assert!(state.has_all_letters());
    }

    #[test]
    fn test_inventory_lines_before_pendant_is_taken() {
        let state = PlayerState::new("Ada");

        let lines = state.inventory().lines();

        assert_eq!(
            lines,
            vec![
                "1. Magnifying Glass",
                "2. Pendant (not taken)",
                "3. L : _",
                "4. O : _",
                "5. C : _",
                "6. K : _",
            ]
        );
    }

    #[test]
    fn test_inventory_lines_show_dial_and_collected_letters() {
        let mut state = PlayerState::new("Ada");
        state.pendant_taken = true;
        state.lives = 2;
        state.letters.insert(Letter::C);

        let lines = state.inventory().lines();

        assert_eq!(lines[1], "2. Pendant (2)");
        assert_eq!(lines[2], "3. L : L");
        assert_eq!(lines[3], "4. O : _");
        assert_eq!(lines[4], "5. C : C");
    }
}
