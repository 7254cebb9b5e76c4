//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the entity, movement and collision rules of the game.
//! It has no dependency on a terminal, an image loader, or a clock:
//!
//! - **Deterministic**: every random roll goes through an injected [`RandomSource`]
//! - **Testable**: the draw surface is a trait, so rendering can be recorded
//! - **Portable**: the runner supplies `dt` and input; the core only reacts
//!
//! # Module Structure
//!
//! - [`character`]: shared position/bounds/hitbox state and the [`Canvas`] seam
//! - [`collision`]: strict AABB overlap with a forgiveness margin
//! - [`obstacle`]: autonomous lane travel, respawn, and hitting the player
//! - [`player`]: stepped movement, win detection, score overlay
//! - [`game_state`]: the session handle the runner drives each frame
//! - [`config`]: presets, JSON overrides, environment settings
//! - [`rng`]: seedable LCG and snapped random draws
//!
//! # Game Rules
//!
//! - The player steps one tile per input and never leaves its bounds; an
//!   illegal step is dropped, not clamped
//! - Reaching the water row scores a win and sends the player home
//! - Bugs cross their stone lane and re-enter from the left with a new lane
//!   and speed once they leave their bounds
//! - Touching a bug sends the player home and clears the win counter
//!
//! # Example
//!
//! ```
//! use tui_frogger_core::{GameConfig, GameState};
//! use tui_frogger_types::Direction;
//!
//! let config = GameConfig { obstacle_count: 0, ..GameConfig::default() };
//! let mut game = GameState::with_seed(config, 12345);
//!
//! for _ in 0..5 {
//!     game.queue_input(Some(Direction::Up));
//! }
//! let events = game.tick(0.016);
//!
//! assert_eq!(events.wins, 1);
//! assert_eq!(game.wins(), 1);
//! ```

pub mod character;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod obstacle;
pub mod player;
pub mod rng;

pub use tui_frogger_types as types;

pub use character::{Canvas, Character, Entity};
pub use collision::{obstacle_hits_player, Aabb};
pub use config::{
    CharacterConfig, CharacterOverride, GameConfig, GameConfigOverride, LaunchConfig,
    VelocityOverride, VelocityRange, MAX_OBSTACLE_COUNT,
};
pub use game_state::{GameState, TickEvents, INPUT_QUEUE_CAPACITY};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleStep};
pub use player::Player;
pub use rng::{random_snapped, RandomSource, SimpleRng};
