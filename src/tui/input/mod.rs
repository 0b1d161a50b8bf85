//! Mode-specific key handling

use crate::app::{App, Mode};
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key event based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.mode {
        Mode::Selection => handle_selection_mode(app, code, modifiers),
        Mode::Confirmation | Mode::ForceConfirmation => {
            handle_confirm_mode(app, code, modifiers);
        }
        // The loop discards input typed during a pass before it gets here
        Mode::Deleting(_) => {}
        Mode::Done => app.acknowledge(),
    }
}

/// Handle key events in the selection list
fn handle_selection_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let Some(action) = app.config.keys.get_action(code, modifiers) else {
        return;
    };
    match action {
        Action::CursorUp => app.select_prev(),
        Action::CursorDown => app.select_next(),
        Action::CursorTop => app.select_first(),
        Action::CursorBottom => app.select_last(),
        Action::Toggle => app.toggle_selected(),
        Action::Delete => app.request_delete(),
        Action::Quit => app.quit(),
    }
}

/// Handle key events in both yes/no prompts
fn handle_confirm_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('y' | 'Y') => app.confirm(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.decline(),
        KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc => app.decline(),
        _ => {}
    }
}
