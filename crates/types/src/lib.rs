//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain value types, usable from the simulation core, the
//! terminal renderer, and configuration loading alike.
//!
//! # World Dimensions
//!
//! Coordinates are world pixels on the classic 505x606 canvas:
//!
//! - **Tiles**: 101 px wide, 83 px tall
//! - **Grid**: 5 columns by 6 rows (water, three stone lanes, two grass rows)
//! - **Origin**: top-left corner, y grows downwards
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_START_X` | 200 | Horizontal start column of the player |
//! | `GOAL_Y` | 0 | Player rows at or above this are "in the water" (a win) |
//! | `COLLISION_MARGIN` | 20 | Forgiveness trimmed off the top of the player hitbox |
//! | `OBSTACLE_RESPAWN_X` | -80 | Off-screen x where obstacles re-enter |
//! | `OBSTACLE_LANE_ADJUST` | 21 | Visual centering subtracted from a snapped lane y |
//! | `OBSTACLE_VELOCITY_MIN` / `MAX` | 50 / 200 | Obstacle speed range (px per time unit) |
//! | `OBSTACLE_VELOCITY_STEP` | 10 | Obstacle speeds are multiples of this |
//!
//! # Examples
//!
//! ```
//! use tui_frogger_types::{Direction, Range, StepSize};
//!
//! // Directional tokens are exact lowercase names; anything else is None.
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(Direction::from_str("UP"), None);
//! assert_eq!(Direction::from_str("jump"), None);
//!
//! // Defaults follow the classic board.
//! assert_eq!(Range::default(), Range::new(0.0, 400.0));
//! assert_eq!(StepSize::default(), StepSize::new(100.0, 82.0));
//! ```

pub mod geometry;

pub use geometry::{
    BoundsOverride, MovementBounds, Offset, OffsetOverride, Position, Range, RangeOverride, Size,
    SizeOverride, StepSize, StepSizeOverride,
};

use serde::{Deserialize, Serialize};

/// Canvas width in world pixels
pub const CANVAS_WIDTH: f32 = 505.0;

/// Canvas height in world pixels
pub const CANVAS_HEIGHT: f32 = 606.0;

/// Width of one background tile
pub const TILE_WIDTH: f32 = 101.0;

/// Height of one background tile
pub const TILE_HEIGHT: f32 = 83.0;

/// Number of tile columns
pub const GRID_COLS: u8 = 5;

/// Number of tile rows
pub const GRID_ROWS: u8 = 6;

/// Player starting x
pub const PLAYER_START_X: f32 = 200.0;

/// Any player y at or above this counts as reaching the water
pub const GOAL_Y: f32 = 0.0;

/// Vertical forgiveness applied to the top edge of the player's hitbox
pub const COLLISION_MARGIN: f32 = 20.0;

/// Obstacles re-enter from here, one sprite width left of the visible board
pub const OBSTACLE_RESPAWN_X: f32 = -80.0;

/// Subtracted from a snapped lane y so the sprite sits centered on the stone row
pub const OBSTACLE_LANE_ADJUST: f32 = 21.0;

/// Slowest obstacle speed
pub const OBSTACLE_VELOCITY_MIN: f32 = 50.0;

/// Fastest obstacle speed
pub const OBSTACLE_VELOCITY_MAX: f32 = 200.0;

/// Obstacle speeds snap to multiples of this
pub const OBSTACLE_VELOCITY_STEP: f32 = 10.0;

/// Obstacles spawned for a fresh session
pub const DEFAULT_OBSTACLE_COUNT: usize = 3;

/// Sprite id of the player character
pub const PLAYER_SPRITE: &str = "images/char-boy.png";

/// Sprite id of the bug obstacle
pub const BUG_SPRITE: &str = "images/enemy-bug.png";

/// The four directional commands the input source can deliver
///
/// Raw keyboard events are translated into these tokens by the input layer;
/// anything that does not map to a direction never reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction token. Only the exact lowercase names match.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_frogger_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("Right"), None);
    /// assert_eq!(Direction::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase token form
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit step for this direction as (dx, dy) multipliers
    ///
    /// Screen coordinates: up is negative y.
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Horizontal text alignment for overlay text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}
