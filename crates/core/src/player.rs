//! The player character: stepped movement, win detection, score overlay.

use crate::character::{Canvas, Character, Entity};
use crate::config::GameConfig;
use crate::types::{Direction, Position, TextAlign};

/// Where the win counter is drawn, right-aligned.
pub const WINS_TEXT_X: f32 = 500.0;
pub const WINS_TEXT_Y: f32 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    character: Character,
    wins: u32,
    start_x: f32,
    goal_y: f32,
}

impl Player {
    /// Create a player on its start tile with zero wins.
    pub fn new(config: &GameConfig) -> Self {
        let mut player = Self {
            character: Character::new(&config.player, Position::default()),
            wins: 0,
            start_x: config.player_start_x,
            goal_y: config.goal_y,
        };
        player.reset();
        player
    }

    /// Zero the win counter and return to the start tile.
    ///
    /// Collisions call this too, so getting hit forfeits every win so far.
    pub fn reset(&mut self) {
        self.wins = 0;
        self.go_to_initial_position();
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn position(&self) -> Position {
        self.character.position()
    }

    /// The start tile: fixed column, bottom-most allowed row.
    pub fn initial_position(&self) -> Position {
        Position::new(self.start_x, self.character.bounds().y.max)
    }

    /// Try one step in `direction`, then check for a win.
    ///
    /// A step that would leave the movement bounds is dropped, never clamped.
    /// `None` stands for any token that is not a direction; it moves nothing
    /// but the win check still runs. Returns true if this input scored.
    pub fn handle_input(&mut self, direction: Option<Direction>) -> bool {
        if let Some(direction) = direction {
            self.try_step(direction);
        }
        self.check_win()
    }

    /// Whether the player stands in the water row.
    pub fn is_on_goal(&self) -> bool {
        self.character.position().y <= self.goal_y
    }

    fn try_step(&mut self, direction: Direction) -> bool {
        let pos = self.character.position();
        let step = self.character.step();
        let (dx, dy) = direction.delta();
        let x = pos.x + dx * step.x;
        let y = pos.y + dy * step.y;

        if !self.character.is_valid_movement(x, y) {
            return false;
        }
        self.character.set_position(Position::new(x, y));
        true
    }

    fn check_win(&mut self) -> bool {
        if !self.is_on_goal() {
            return false;
        }
        self.wins += 1;
        tracing::debug!(wins = self.wins, "player reached the water");
        self.go_to_initial_position();
        true
    }

    fn go_to_initial_position(&mut self) {
        let start = self.initial_position();
        self.character.set_position(start);
    }
}

impl Entity for Player {
    fn character(&self) -> &Character {
        &self.character
    }

    /// Sprite first, then the win counter on top.
    fn render(&self, canvas: &mut dyn Canvas) {
        self.character.render(canvas);
        canvas.draw_text(
            &format!("Wins: {}", self.wins),
            WINS_TEXT_X,
            WINS_TEXT_Y,
            TextAlign::Right,
        );
    }
}
