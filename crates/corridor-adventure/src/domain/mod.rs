//! Domain model for a single run of the game.

pub mod aggregates;
pub mod assets;
pub mod commands;
pub mod cue;
pub mod events;
pub mod narration;
pub mod player;
pub mod puzzle;
pub mod scene;
