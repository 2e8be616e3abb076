//! Key mapping from terminal events to table actions.

use crate::types::TableAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to table actions.
pub fn handle_key_event(key: KeyEvent) -> Option<TableAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(TableAction::StartRound),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(TableAction::EndRound),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(TableAction::SubmitMove),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TableAction::Refresh),
        _ => None,
    }
}

/// Check if key should quit the client.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
