//! Game state module - owns every entity of a session
//!
//! This is the driver-facing handle: the runner queues input and calls
//! [`GameState::tick`] once per frame, then [`GameState::render`].
//!
//! # Tick ordering
//!
//! Within a tick, all queued input is applied before any obstacle moves. An
//! obstacle's collision check therefore always sees where the player stands
//! after this frame's input. Obstacles are then updated in spawn order.

use arrayvec::ArrayVec;

use crate::character::{Canvas, Entity};
use crate::config::GameConfig;
use crate::obstacle::{Obstacle, ObstacleKind};
use crate::player::Player;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::Direction;

/// Inputs buffered between two ticks; more than this in one frame are dropped.
pub const INPUT_QUEUE_CAPACITY: usize = 16;

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub wins: u32,
    pub collisions: u32,
    pub respawns: u32,
}

impl TickEvents {
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    player: Player,
    obstacles: Vec<Obstacle>,
    rng: R,
    pending: ArrayVec<Direction, INPUT_QUEUE_CAPACITY>,
    ticks: u64,
}

impl GameState<SimpleRng> {
    /// Create a new session driven by the built-in LCG
    pub fn with_seed(config: GameConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a session: one player and `config.obstacle_count` bugs.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let player = Player::new(&config);
        let obstacles = (0..config.obstacle_count)
            .map(|_| Obstacle::new(ObstacleKind::Bug, &config, &mut rng))
            .collect();

        Self {
            config,
            player,
            obstacles,
            rng,
            pending: ArrayVec::new(),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn wins(&self) -> u32 {
        self.player.wins()
    }

    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    /// Buffer an input for the next tick.
    ///
    /// `None` (an unrecognized token) is ignored outright. Returns false when
    /// the queue is full and the input was dropped.
    pub fn queue_input(&mut self, direction: Option<Direction>) -> bool {
        let Some(direction) = direction else {
            return true;
        };
        if self.pending.try_push(direction).is_err() {
            tracing::warn!(
                direction = direction.as_str(),
                capacity = INPUT_QUEUE_CAPACITY,
                "input queue full, dropping input"
            );
            return false;
        }
        true
    }

    /// Apply an input right away. Returns true if it scored.
    pub fn handle_input(&mut self, direction: Option<Direction>) -> bool {
        self.player.handle_input(direction)
    }

    /// Advance the session by `dt` time units.
    pub fn tick(&mut self, dt: f32) -> TickEvents {
        let mut events = TickEvents::default();

        for direction in self.pending.drain(..) {
            if self.player.handle_input(Some(direction)) {
                events.wins += 1;
            }
        }

        for obstacle in &mut self.obstacles {
            let step = obstacle.update(dt, &mut self.rng, &mut self.player);
            events.respawns += step.respawned as u32;
            events.collisions += step.collided as u32;
        }

        self.ticks = self.ticks.wrapping_add(1);
        events
    }

    /// Draw obstacles, then the player and its score on top.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for obstacle in &self.obstacles {
            obstacle.render(canvas);
        }
        self.player.render(canvas);
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(GameConfig::default(), 1)
    }
}
