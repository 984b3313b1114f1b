//! Key mapping from terminal events to application actions.

use crate::types::{AppAction, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to application actions.
pub fn handle_key_event(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(AppAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(AppAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(AppAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(AppAction::Move(Direction::Down))
        }

        // Palette: 1-9 select the first nine swatches, 0 the tenth.
        KeyCode::Char(c @ '1'..='9') => {
            Some(AppAction::SelectSwatch(c as usize - '1' as usize))
        }
        KeyCode::Char('0') => Some(AppAction::SelectSwatch(9)),
        KeyCode::Char(']') => Some(AppAction::NextSwatch),
        KeyCode::Char('[') => Some(AppAction::PrevSwatch),

        _ => None,
    }
}

/// Check if the key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
