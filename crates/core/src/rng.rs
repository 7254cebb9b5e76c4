//! RNG module - seedable random source for respawn rolls
//!
//! Obstacles never call an ambient random function. Every roll goes through a
//! [`RandomSource`] owned by the game state, so a seed fully determines lanes
//! and speeds and tests can script exact values.

/// Source of uniform random values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state, usable as a seed to replay from here
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly, so the result stays below 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Draw a value in `[min, max]` rounded to the nearest multiple of `multiple`.
///
/// Rounding happens after scaling, so the endpoints are reachable only when
/// they themselves round onto the grid.
pub fn random_snapped<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: f32,
    max: f32,
    multiple: f32,
) -> f32 {
    let raw = rng.next_unit() * (max - min) + min;
    (raw / multiple).round() * multiple
}
