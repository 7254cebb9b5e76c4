//! Terminal input module.
//!
//! Maps `crossterm` key events onto the four [`crate::types::Direction`]
//! tokens the game understands. Keys with no mapping yield `None`, which the
//! game treats as a no-op.

pub mod map;

pub use tui_frogger_types as types;

pub use map::{direction_for_key, map_key, should_quit};
