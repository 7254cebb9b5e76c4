use tui_frogger::core::{GameConfig, GameState};
use tui_frogger::term::{GameView, Viewport, PLAYFIELD_COLS, PLAYFIELD_ROWS};
use tui_frogger::types::{Direction, Position};

fn exact() -> Viewport {
    // Border on both sides plus the hint line.
    Viewport::new(PLAYFIELD_COLS + 2, PLAYFIELD_ROWS + 3)
}

fn quiet_game() -> GameState {
    GameState::with_seed(
        GameConfig {
            obstacle_count: 0,
            ..GameConfig::default()
        },
        1,
    )
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&quiet_game(), exact());
    let r = PLAYFIELD_COLS + 1;
    let b = PLAYFIELD_ROWS + 1;

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(r, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, b).unwrap().ch, '└');
    assert_eq!(fb.get(r, b).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_win_counter() {
    let mut game = quiet_game();
    for _ in 0..5 {
        game.handle_input(Some(Direction::Up));
    }
    let fb = GameView::default().render(&game, exact());
    assert!(fb.row_text(2).contains("Wins: 1"), "row was {:?}", fb.row_text(2));
}

#[test]
fn term_view_draws_player_on_start_tile() {
    let fb = GameView::default().render(&quiet_game(), exact());
    // Player head at column 22, row 16 of the field; field origin is (1, 1).
    assert_eq!(fb.get(23, 17).unwrap().ch, '\\');
}

#[test]
fn term_view_draws_bug_in_its_lane() {
    let mut game = GameState::with_seed(
        GameConfig {
            obstacle_count: 1,
            ..GameConfig::default()
        },
        1,
    );
    game.obstacles_mut()[0].set_position(Position::new(101.0, 143.0));

    let fb = GameView::default().render(&game, exact());
    // (101, 143 + 75) px -> column 10, row 7 of the field; the body is the
    // second art line.
    assert_eq!(fb.get(11, 9).unwrap().ch, '<');
}

#[test]
fn term_view_centers_in_large_viewport() {
    let fb = GameView::default().render(&quiet_game(), Viewport::new(100, 40));
    let x0 = (100 - (PLAYFIELD_COLS + 2)) / 2;
    let y0 = (40 - (PLAYFIELD_ROWS + 3)) / 2;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '┌');
    assert!(fb.row_text(y0 + PLAYFIELD_ROWS + 2).contains("q: quit"));
}
