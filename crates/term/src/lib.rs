//! Terminal renderer for the crossing game.
//!
//! Rendering is split in two halves. [`GameView`] is pure: it turns a
//! `GameState` into a [`FrameBuffer`] of styled cells. [`TerminalRenderer`]
//! owns the real terminal and flushes framebuffers to it, sending only the
//! cells that changed since the previous frame.
//!
//! World pixels are scaled down to cells (see [`canvas`]); sprites are glyph
//! art looked up by their image id (see [`sprites`]).

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use canvas::{TermCanvas, PLAYFIELD_COLS, PLAYFIELD_ROWS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Lane, Viewport, LANES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{Sprite, SpriteSheet};
