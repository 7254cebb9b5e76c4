//! Obstacles: characters that cross their lane on their own.
//!
//! Every obstacle kind shares one update routine. A kind only selects which
//! [`CharacterConfig`] the obstacle is built from (sprite, size, hitbox
//! offset); travel, respawn and collision never differ per kind.

use crate::character::{Character, Entity};
use crate::collision::obstacle_hits_player;
use crate::config::GameConfig;
use crate::player::Player;
use crate::rng::{random_snapped, RandomSource};
use crate::types::Position;

/// Obstacle variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Bug,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Bug => "bug",
        }
    }
}

/// What happened to one obstacle during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObstacleStep {
    pub respawned: bool,
    pub collided: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RespawnRule {
    x: f32,
    lane_adjust: f32,
    velocity_min: f32,
    velocity_max: f32,
    velocity_step: f32,
    collision_margin: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    kind: ObstacleKind,
    character: Character,
    velocity: f32,
    rule: RespawnRule,
}

impl Obstacle {
    /// Build an obstacle and roll its first lane and speed.
    pub fn new<R: RandomSource + ?Sized>(
        kind: ObstacleKind,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        let character_config = match kind {
            ObstacleKind::Bug => &config.bug,
        };
        let rule = RespawnRule {
            x: config.respawn_x,
            lane_adjust: config.lane_adjust,
            velocity_min: config.velocity.min,
            velocity_max: config.velocity.max,
            velocity_step: config.velocity.step,
            collision_margin: config.collision_margin,
        };

        let mut obstacle = Self {
            kind,
            character: Character::new(character_config, Position::new(rule.x, 0.0)),
            velocity: 0.0,
            rule,
        };
        obstacle.respawn(rng);
        obstacle
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Horizontal speed in pixels per time unit.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn position(&self) -> Position {
        self.character.position()
    }

    /// Place the obstacle directly, keeping its current speed.
    pub fn set_position(&mut self, position: Position) {
        self.character.set_position(position);
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Advance one frame.
    ///
    /// Moves by `velocity * dt`, respawns when the new position leaves the
    /// movement bounds, then checks the player for a hit regardless of
    /// whether a respawn happened. A hit resets the player.
    ///
    /// `dt` is not validated: zero leaves the obstacle in place, a negative
    /// value moves it backwards.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        player: &mut Player,
    ) -> ObstacleStep {
        let mut step = ObstacleStep::default();

        let pos = self.character.position();
        let x = pos.x + self.velocity * dt;
        self.character.set_position(Position::new(x, pos.y));

        if !self.character.is_valid_movement(x, pos.y) {
            self.respawn(rng);
            step.respawned = true;
        }

        if self.hits(player) {
            tracing::debug!(
                kind = self.kind.as_str(),
                x = self.character.position().x,
                y = self.character.position().y,
                wins_lost = player.wins(),
                "player hit"
            );
            player.reset();
            step.collided = true;
        }

        step
    }

    /// Whether this obstacle's hitbox currently overlaps the player's.
    pub fn hits(&self, player: &Player) -> bool {
        obstacle_hits_player(
            self.character.hitbox(),
            player.character().hitbox(),
            self.rule.collision_margin,
        )
    }

    // Terminal assignment: the snapped lane minus the adjustment always lands
    // inside the y bounds for the shipped presets, so there is no retry.
    fn respawn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let bounds = *self.character.bounds();
        let step_y = self.character.step().y;

        let y = random_snapped(rng, bounds.y.min, bounds.y.max, step_y) - self.rule.lane_adjust;
        self.velocity = random_snapped(
            rng,
            self.rule.velocity_min,
            self.rule.velocity_max,
            self.rule.velocity_step,
        );
        self.character.set_position(Position::new(self.rule.x, y));

        tracing::trace!(
            kind = self.kind.as_str(),
            y,
            velocity = self.velocity,
            "obstacle respawned"
        );
    }
}

impl Entity for Obstacle {
    fn character(&self) -> &Character {
        &self.character
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::tests::RecordingCanvas;
    use crate::rng::SimpleRng;
    use crate::types::Direction;

    /// Replays a fixed list of unit values, cycling.
    struct Scripted {
        values: Vec<f32>,
        i: usize,
    }

    impl Scripted {
        fn new(values: &[f32]) -> Self {
            Self {
                values: values.to_vec(),
                i: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f32 {
            let v = self.values[self.i % self.values.len()];
            self.i += 1;
            v
        }
    }

    fn player_on_middle_lane(config: &GameConfig) -> Player {
        let mut p = Player::new(config);
        p.handle_input(Some(Direction::Up));
        p.handle_input(Some(Direction::Up));
        assert_eq!(p.position(), Position::new(200.0, 221.0));
        p
    }

    #[test]
    fn spawn_rolls_lane_and_speed() {
        let config = GameConfig::default();
        // y: 0.0 * 165 + 60 = 60 → 82 - 21 = 61; velocity: 0.0 → 50
        let bug = Obstacle::new(ObstacleKind::Bug, &config, &mut Scripted::new(&[0.0]));
        assert_eq!(bug.position(), Position::new(-80.0, 61.0));
        assert_eq!(bug.velocity(), 50.0);
        assert_eq!(bug.character().sprite(), "images/enemy-bug.png");
    }

    #[test]
    fn spawn_lanes_cover_the_three_stone_rows() {
        let config = GameConfig::default();
        let lane = |u: f32| {
            Obstacle::new(ObstacleKind::Bug, &config, &mut Scripted::new(&[u, 0.0]))
                .position()
                .y
        };
        assert_eq!(lane(0.0), 61.0);
        assert_eq!(lane(0.5), 143.0);
        assert_eq!(lane(0.99), 225.0);
    }

    #[test]
    fn update_advances_by_velocity_times_dt() {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(3);
        let mut player = Player::new(&config);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        bug.set_position(Position::new(0.0, 61.0));
        bug.set_velocity(100.0);

        let step = bug.update(0.5, &mut rng, &mut player);
        assert_eq!(step, ObstacleStep::default());
        assert_eq!(bug.position(), Position::new(50.0, 61.0));
    }

    #[test]
    fn update_with_zero_dt_stays_put() {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(3);
        let mut player = Player::new(&config);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        let before = bug.position();

        bug.update(0.0, &mut rng, &mut player);
        assert_eq!(bug.position(), before);
    }

    #[test]
    fn leaving_right_edge_respawns_left() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let mut rng = Scripted::new(&[0.5, 1.0 / 3.0]);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        bug.set_position(Position::new(480.0, 61.0));
        bug.set_velocity(200.0);

        let step = bug.update(0.1, &mut rng, &mut player);
        assert!(step.respawned);
        assert!(!step.collided);
        assert_eq!(bug.position(), Position::new(-80.0, 143.0));
        assert_eq!(bug.velocity(), 100.0);
    }

    #[test]
    fn respawned_obstacle_is_always_valid() {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(2024);
        let mut player = Player::new(&config);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);

        for _ in 0..5_000 {
            bug.update(0.75, &mut rng, &mut player);
            let p = bug.position();
            assert!(bug.is_valid_movement(p.x, p.y), "invalid at {p:?}");
            assert!(p.x >= -80.0);
            assert!((60.0..=225.0).contains(&p.y));
            let v = bug.velocity();
            assert!((50.0..=200.0).contains(&v));
            assert_eq!(v % 10.0, 0.0);
        }
    }

    #[test]
    fn overlap_resets_player_and_zeroes_wins() {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(1);
        let mut player = Player::new(&config);

        // Score once: 385 → 303 → 221 → 139 → 57 → -25 (win).
        for _ in 0..5 {
            player.handle_input(Some(Direction::Up));
        }
        assert_eq!(player.wins(), 1);
        player.handle_input(Some(Direction::Up));
        player.handle_input(Some(Direction::Up));
        assert_eq!(player.position(), Position::new(200.0, 221.0));

        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        bug.set_position(Position::new(200.0, 225.0));
        let step = bug.update(0.0, &mut rng, &mut player);

        assert!(step.collided);
        assert_eq!(player.wins(), 0);
        assert_eq!(player.position(), Position::new(200.0, 385.0));
    }

    #[test]
    fn collision_checked_even_after_respawn() {
        let mut config = GameConfig::default();
        // Respawn right on top of the player's lane and column.
        config.respawn_x = 200.0;
        let mut rng = Scripted::new(&[0.99, 0.0]);
        let mut player = player_on_middle_lane(&config);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        bug.set_position(Position::new(482.0, 225.0));
        bug.set_velocity(50.0);

        let step = bug.update(1.0, &mut rng, &mut player);
        assert!(step.respawned);
        assert!(step.collided);
        assert_eq!(player.position(), Position::new(200.0, 385.0));
    }

    #[test]
    fn no_collision_with_player_on_start_row() {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(5);
        let mut player = Player::new(&config);
        let mut bug = Obstacle::new(ObstacleKind::Bug, &config, &mut rng);
        bug.set_position(Position::new(200.0, 225.0));

        assert!(!bug.hits(&player));
        assert!(!bug.update(0.0, &mut rng, &mut player).collided);
    }

    #[test]
    fn render_draws_bug_sprite() {
        let config = GameConfig::default();
        let bug = Obstacle::new(ObstacleKind::Bug, &config, &mut Scripted::new(&[0.0]));
        let mut canvas = RecordingCanvas::default();
        bug.render(&mut canvas);
        assert_eq!(
            canvas.images,
            vec![("images/enemy-bug.png".to_string(), -80.0, 61.0)]
        );
    }
}
