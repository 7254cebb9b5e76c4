//! Character base shared by every entity on the board.
//!
//! Obstacles and the player each own a [`Character`] and add their own
//! behaviour on top. Rendering goes through the [`Canvas`] seam so the core
//! never touches a terminal or image loader.

use crate::collision::Aabb;
use crate::config::CharacterConfig;
use crate::types::{MovementBounds, Offset, Position, Size, StepSize, TextAlign};

/// Draw surface supplied by the rendering collaborator.
///
/// Coordinates are world pixels. How a sprite id turns into pixels (and what
/// happens when it cannot be found) is entirely up to the implementation.
pub trait Canvas {
    fn draw_image(&mut self, sprite: &str, x: f32, y: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);
}

/// Position, extent and movement limits of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    position: Position,
    bounds: MovementBounds,
    step: StepSize,
    size: Size,
    offset: Offset,
    sprite: String,
}

impl Character {
    pub fn new(config: &CharacterConfig, position: Position) -> Self {
        Self {
            position,
            bounds: config.bounds,
            step: config.step,
            size: config.size,
            offset: config.offset,
            sprite: config.sprite.clone(),
        }
    }

    /// True iff `(x, y)` lies inside the movement bounds on both axes (inclusive).
    ///
    /// Callers test the candidate position before mutating.
    pub fn is_valid_movement(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the anchor without any bounds check.
    ///
    /// Used for resets and respawns whose targets are valid by construction.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn bounds(&self) -> &MovementBounds {
        &self.bounds
    }

    pub fn step(&self) -> StepSize {
        self.step
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    /// Collision box: `(position + offset, position + offset + size)`.
    pub fn hitbox(&self) -> Aabb {
        let left = self.position.x + self.offset.x;
        let top = self.position.y + self.offset.y;
        Aabb {
            left,
            top,
            right: left + self.size.width,
            bottom: top + self.size.height,
        }
    }

    /// Draw the sprite at the current anchor.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(&self.sprite, self.position.x, self.position.y);
    }
}

/// Capabilities every entity exposes to the driver.
pub trait Entity {
    fn character(&self) -> &Character;

    fn is_valid_movement(&self, x: f32, y: f32) -> bool {
        self.character().is_valid_movement(x, y)
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.character().render(canvas);
    }
}
