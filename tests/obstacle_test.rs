//! Integration tests for obstacle travel and respawn.

use tui_frogger::core::{GameConfig, GameState};

const LANES: [f32; 3] = [61.0, 143.0, 225.0];

fn assert_fresh_roll(velocity: f32, y: f32) {
    assert!((50.0..=200.0).contains(&velocity), "velocity {velocity}");
    assert_eq!(velocity % 10.0, 0.0, "velocity {velocity} not snapped");
    assert!(LANES.contains(&y), "lane {y}");
}

#[test]
fn test_spawned_obstacles_start_at_the_left_edge() {
    let game = GameState::with_seed(GameConfig::default(), 2024);
    assert_eq!(game.obstacles().len(), 3);
    for obstacle in game.obstacles() {
        let p = obstacle.position();
        assert_eq!(p.x, -80.0);
        assert_fresh_roll(obstacle.velocity(), p.y);
    }
}

#[test]
fn test_obstacles_cross_and_respawn() {
    let mut game = GameState::with_seed(
        GameConfig {
            obstacle_count: 5,
            ..GameConfig::default()
        },
        31337,
    );

    let mut respawns = 0;
    for _ in 0..2_000 {
        let before: Vec<f32> = game.obstacles().iter().map(|o| o.position().x).collect();
        respawns += game.tick(0.05).respawns;

        for (obstacle, x0) in game.obstacles().iter().zip(before) {
            let p = obstacle.position();
            assert!((-82.0..=482.0).contains(&p.x), "x {} out of bounds", p.x);
            if p.x < x0 {
                // Wrapped around: a fresh lane and speed.
                assert_eq!(p.x, -80.0);
                assert_fresh_roll(obstacle.velocity(), p.y);
            } else {
                assert!(LANES.contains(&p.y));
            }
        }
    }
    // 2000 * 0.05 = 100 time units; even the slowest bug wraps several times.
    assert!(respawns >= 5 * 8, "only {respawns} respawns");
}

#[test]
fn test_same_seed_same_traffic() {
    let run = |seed| {
        let mut game = GameState::with_seed(GameConfig::default(), seed);
        for _ in 0..500 {
            game.tick(0.05);
        }
        game.obstacles()
            .iter()
            .map(|o| (o.position().x, o.position().y, o.velocity()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(5), run(5));
}
