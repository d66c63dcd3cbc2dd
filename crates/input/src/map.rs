//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::ChangeDirection(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::ChangeDirection(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::ChangeDirection(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::ChangeDirection(Direction::Right))
        }

        // Game flow
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Exit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        // Initial speed setting (lower delay = faster)
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::SpeedFaster),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::SpeedSlower),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn steer(dir: Direction) -> Option<GameAction> {
        Some(GameAction::ChangeDirection(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), steer(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), steer(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), steer(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_any_case() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), steer(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('A'))), steer(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('s'))), steer(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), steer(Direction::Right));
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), steer(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('h'))), steer(Direction::Left));
    }

    #[test]
    fn test_flow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Exit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(GameAction::SpeedFaster)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(GameAction::SpeedSlower)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
