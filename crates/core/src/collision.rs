//! Axis-aligned bounding box overlap between an obstacle and the player.

/// Axis-aligned box in world pixels. `top < bottom` since y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Strict overlap test with a forgiveness margin on the player's top edge.
///
/// All four comparisons are strict, so boxes that merely touch do not hit.
/// `margin` shrinks the player's box from above: an obstacle has to reach
/// past `player.top + margin` before it counts.
#[inline]
pub fn obstacle_hits_player(obstacle: Aabb, player: Aabb, margin: f32) -> bool {
    obstacle.left < player.right
        && obstacle.right > player.left
        && obstacle.top < player.bottom
        && obstacle.bottom > player.top + margin
}
