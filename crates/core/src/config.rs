//! Game configuration: per-character presets, tuning values, and loading.
//!
//! Defaults reproduce the classic board. A JSON override file may change any
//! subset of fields; missing fields keep the preset value (not the type
//! default), so `{"player":{"bounds":{"y":{"max":303}}}}` only moves the
//! player's starting row.
//!
//! # Environment Variables
//!
//! - `FROGGER_SEED`: RNG seed (default: 1)
//! - `FROGGER_BUGS`: number of obstacles (default: 3)
//! - `FROGGER_CONFIG`: path to a JSON override file
//! - `FROGGER_TICK_MS`: frame interval of the driver loop (default: 16)
//! - `FROGGER_LOG_PATH`: write logs to this file (disabled when unset)
//! - `FROGGER_LOG`: tracing filter directive (default: "info")

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    BoundsOverride, MovementBounds, Offset, OffsetOverride, Range, Size, SizeOverride, StepSize,
    StepSizeOverride, BUG_SPRITE, COLLISION_MARGIN, DEFAULT_OBSTACLE_COUNT, GOAL_Y,
    OBSTACLE_LANE_ADJUST, OBSTACLE_RESPAWN_X, OBSTACLE_VELOCITY_MAX, OBSTACLE_VELOCITY_MIN,
    OBSTACLE_VELOCITY_STEP, PLAYER_SPRITE, PLAYER_START_X,
};

/// Upper limit on `obstacle_count` accepted from a config file or the environment.
pub const MAX_OBSTACLE_COUNT: usize = 256;

/// Everything a [`Character`](crate::Character) is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub bounds: MovementBounds,
    pub step: StepSize,
    pub size: Size,
    pub offset: Offset,
    pub sprite: String,
}

impl CharacterConfig {
    /// The player: free x in the default `[0, 400]`, rows from -25 (water) to 385 (grass).
    pub fn player() -> Self {
        Self {
            bounds: MovementBounds::new(Range::default(), Range::new(-25.0, 385.0)),
            step: StepSize::default(),
            size: Size::new(72.0, 80.0),
            offset: Offset::new(15.0, 62.0),
            sprite: PLAYER_SPRITE.to_string(),
        }
    }

    /// The bug: x spans well past both screen edges so travel is never blocked.
    pub fn bug() -> Self {
        Self {
            bounds: MovementBounds::new(Range::new(-82.0, 482.0), Range::new(60.0, 225.0)),
            step: StepSize::default(),
            size: Size::new(100.0, 70.0),
            offset: Offset::new(0.0, 75.0),
            sprite: BUG_SPRITE.to_string(),
        }
    }

    pub fn merged(mut self, o: &CharacterOverride) -> Self {
        if let Some(b) = &o.bounds {
            self.bounds = self.bounds.merged(b);
        }
        if let Some(s) = &o.step {
            self.step = self.step.merged(s);
        }
        if let Some(s) = &o.size {
            self.size = self.size.merged(s);
        }
        if let Some(off) = &o.offset {
            self.offset = self.offset.merged(off);
        }
        if let Some(sprite) = &o.sprite {
            self.sprite.clone_from(sprite);
        }
        self
    }
}

/// Inclusive speed range for respawned obstacles, snapped to `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for VelocityRange {
    fn default() -> Self {
        Self {
            min: OBSTACLE_VELOCITY_MIN,
            max: OBSTACLE_VELOCITY_MAX,
            step: OBSTACLE_VELOCITY_STEP,
        }
    }
}

/// Full tuning of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player: CharacterConfig,
    pub bug: CharacterConfig,
    pub obstacle_count: usize,
    pub player_start_x: f32,
    pub goal_y: f32,
    pub collision_margin: f32,
    pub respawn_x: f32,
    pub lane_adjust: f32,
    pub velocity: VelocityRange,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: CharacterConfig::player(),
            bug: CharacterConfig::bug(),
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            player_start_x: PLAYER_START_X,
            goal_y: GOAL_Y,
            collision_margin: COLLISION_MARGIN,
            respawn_x: OBSTACLE_RESPAWN_X,
            lane_adjust: OBSTACLE_LANE_ADJUST,
            velocity: VelocityRange::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a sparse override on top of this config.
    pub fn merged(mut self, o: &GameConfigOverride) -> Self {
        if let Some(p) = &o.player {
            self.player = self.player.merged(p);
        }
        if let Some(b) = &o.bug {
            self.bug = self.bug.merged(b);
        }
        if let Some(v) = &o.velocity {
            self.velocity = VelocityRange {
                min: v.min.unwrap_or(self.velocity.min),
                max: v.max.unwrap_or(self.velocity.max),
                step: v.step.unwrap_or(self.velocity.step),
            };
        }
        self.obstacle_count = o.obstacle_count.unwrap_or(self.obstacle_count);
        self.player_start_x = o.player_start_x.unwrap_or(self.player_start_x);
        self.goal_y = o.goal_y.unwrap_or(self.goal_y);
        self.collision_margin = o.collision_margin.unwrap_or(self.collision_margin);
        self.respawn_x = o.respawn_x.unwrap_or(self.respawn_x);
        self.lane_adjust = o.lane_adjust.unwrap_or(self.lane_adjust);
        self
    }

    /// Defaults merged with a JSON override document, then validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let o: GameConfigOverride =
            serde_json::from_str(json).context("invalid game config override")?;
        let config = Self::default().merged(&o);
        config.validate()?;
        Ok(config)
    }

    /// Check that obstacles can always respawn into a valid position and
    /// that the player starts inside its own bounds.
    ///
    /// Lanes are snapped multiples of the bug's row step minus `lane_adjust`.
    /// They grow monotonically, so only the first and last lane are checked.
    pub fn validate(&self) -> Result<()> {
        check_range("player.bounds.x", self.player.bounds.x)?;
        check_range("player.bounds.y", self.player.bounds.y)?;
        check_range("bug.bounds.x", self.bug.bounds.x)?;
        check_range("bug.bounds.y", self.bug.bounds.y)?;
        check_step("player.step.x", self.player.step.x)?;
        check_step("player.step.y", self.player.step.y)?;
        check_step("bug.step.y", self.bug.step.y)?;
        check_step("velocity.step", self.velocity.step)?;

        ensure!(
            self.velocity.min.is_finite() && self.velocity.max.is_finite(),
            "velocity range must be finite"
        );
        ensure!(
            self.velocity.min <= self.velocity.max,
            "velocity.min ({}) exceeds velocity.max ({})",
            self.velocity.min,
            self.velocity.max
        );
        ensure!(
            self.obstacle_count <= MAX_OBSTACLE_COUNT,
            "obstacle_count {} exceeds {MAX_OBSTACLE_COUNT}",
            self.obstacle_count
        );
        ensure!(
            self.collision_margin.is_finite() && self.goal_y.is_finite(),
            "collision_margin and goal_y must be finite"
        );
        ensure!(
            self.player.bounds.x.contains(self.player_start_x),
            "player_start_x {} is outside player.bounds.x",
            self.player_start_x
        );
        ensure!(
            self.bug.bounds.x.contains(self.respawn_x),
            "respawn_x {} is outside bug.bounds.x",
            self.respawn_x
        );

        let y = self.bug.bounds.y;
        let step = self.bug.step.y;
        for snapped in [(y.min / step).round() * step, (y.max / step).round() * step] {
            let lane = snapped - self.lane_adjust;
            ensure!(
                y.contains(lane),
                "lane {lane} (lane_adjust {}) is outside bug.bounds.y",
                self.lane_adjust
            );
        }
        Ok(())
    }

    /// Defaults merged with the JSON override file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterOverride {
    pub bounds: Option<BoundsOverride>,
    pub step: Option<StepSizeOverride>,
    pub size: Option<SizeOverride>,
    pub offset: Option<OffsetOverride>,
    pub sprite: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityOverride {
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub step: Option<f32>,
}

/// Sparse form of [`GameConfig`] as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfigOverride {
    pub player: Option<CharacterOverride>,
    pub bug: Option<CharacterOverride>,
    pub obstacle_count: Option<usize>,
    pub player_start_x: Option<f32>,
    pub goal_y: Option<f32>,
    pub collision_margin: Option<f32>,
    pub respawn_x: Option<f32>,
    pub lane_adjust: Option<f32>,
    pub velocity: Option<VelocityOverride>,
}

/// Process-level settings for the terminal runner.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub game: GameConfig,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: 16,
            game: GameConfig::default(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl LaunchConfig {
    /// Create from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; an unreadable or
    /// malformed `FROGGER_CONFIG` file is an error.
    pub fn from_env() -> Result<Self> {
        use std::env;

        let defaults = Self::default();

        let mut game = match non_empty_var("FROGGER_CONFIG") {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(count) = env::var("FROGGER_BUGS").ok().and_then(|s| s.parse().ok()) {
            game.obstacle_count = count;
        }
        game.validate().context("invalid game settings from environment")?;

        let seed = env::var("FROGGER_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let tick_ms = env::var("FROGGER_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Ok(Self {
            seed,
            tick_ms,
            game,
            log_path: non_empty_var("FROGGER_LOG_PATH"),
            log_filter: non_empty_var("FROGGER_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn check_range(name: &str, range: Range) -> Result<()> {
    ensure!(
        range.min.is_finite() && range.max.is_finite() && range.min <= range.max,
        "{name} must be a finite range with min <= max, got {}..{}",
        range.min,
        range.max
    );
    Ok(())
}

fn check_step(name: &str, step: f32) -> Result<()> {
    ensure!(step.is_finite() && step > 0.0, "{name} must be positive, got {step}");
    Ok(())
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
