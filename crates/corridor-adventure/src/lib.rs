//! Corridor Adventure: the game.
//!
//! A detective walks into a mansion, takes a cursed pendant and wakes in a
//! corridor with three puzzle rooms and a locked south door. Collect O, C and
//! K to escape; run the pendant down to zero and the shadows win.
//!
//! The `domain` module holds the scene machine and its rules; `application`
//! loads runs from the event repository, executes commands and builds views.

pub mod application;
pub mod domain;
