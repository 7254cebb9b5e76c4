//! Geometry and movement configuration values.
//!
//! Each type has a documented default. Partial configuration is expressed with
//! the matching `*Override` type, whose `None` fields keep the base value when
//! merged. Merging is recursive: overriding only `y.max` of a bounds leaves
//! `y.min` and the whole x range untouched.

use serde::{Deserialize, Serialize};

/// An inclusive numeric interval.
///
/// Defaults to `[0, 400]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if `v` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn merged(self, o: &RangeOverride) -> Self {
        Self {
            min: o.min.unwrap_or(self.min),
            max: o.max.unwrap_or(self.max),
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0.0, 400.0)
    }
}

/// The legal rectangle for a character's reference point.
///
/// This constrains the position anchor, not the rendered footprint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementBounds {
    pub x: Range,
    pub y: Range,
}

impl MovementBounds {
    pub const fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.y.contains(y) && self.x.contains(x)
    }

    pub fn merged(self, o: &BoundsOverride) -> Self {
        Self {
            x: o.x.as_ref().map_or(self.x, |r| self.x.merged(r)),
            y: o.y.as_ref().map_or(self.y, |r| self.y.merged(r)),
        }
    }
}

/// Per-axis discrete movement increment. Defaults to one tile: `(100, 82)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSize {
    pub x: f32,
    pub y: f32,
}

impl StepSize {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn merged(self, o: &StepSizeOverride) -> Self {
        Self {
            x: o.x.unwrap_or(self.x),
            y: o.y.unwrap_or(self.y),
        }
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self::new(100.0, 82.0)
    }
}

/// Collision extent of a sprite. Defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub height: f32,
    pub width: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { height, width }
    }

    pub fn merged(self, o: &SizeOverride) -> Self {
        Self {
            height: o.height.unwrap_or(self.height),
            width: o.width.unwrap_or(self.width),
        }
    }
}

/// Shift from the position anchor to the collision box origin. Defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn merged(self, o: &OffsetOverride) -> Self {
        Self {
            x: o.x.unwrap_or(self.x),
            y: o.y.unwrap_or(self.y),
        }
    }
}

/// A character's reference point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOverride {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsOverride {
    pub x: Option<RangeOverride>,
    pub y: Option<RangeOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSizeOverride {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeOverride {
    pub height: Option<f32>,
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetOverride {
    pub x: Option<f32>,
    pub y: Option<f32>,
}
