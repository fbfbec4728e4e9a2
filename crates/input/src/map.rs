//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, PegId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Peg selection (1-3, or a/s/d home-row equivalents)
        KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::SelectPeg(PegId::Left))
        }
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SelectPeg(PegId::Middle))
        }
        KeyCode::Char('3') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::SelectPeg(PegId::Right))
        }

        // Disk count
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            Some(GameAction::IncreaseDisks)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
            Some(GameAction::DecreaseDisks)
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        // Auto-solve
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Enter => Some(GameAction::Solve),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
