//! Key mapping from terminal events to directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key code to a direction: arrows, WASD and HJKL (any case).
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Direction::Up),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Direction::Down),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key event to at most one step.
///
/// Only presses count. Auto-repeat and release events map to `None` so a
/// single keystroke can never move the player twice (terminals that report
/// releases would otherwise deliver each key twice).
pub fn map_key(key: KeyEvent) -> Option<Direction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    direction_for_key(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Direction::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Direction::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Direction::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Direction::Right));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Direction::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Direction::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Direction::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L'))), Some(Direction::Right));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_only_presses_move() {
        assert_eq!(map_key(with_kind(KeyCode::Up, KeyEventKind::Repeat)), None);
        assert_eq!(map_key(with_kind(KeyCode::Up, KeyEventKind::Release)), None);
        assert_eq!(
            map_key(with_kind(KeyCode::Up, KeyEventKind::Press)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_control_chords_do_not_move() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Up)));
    }
}
