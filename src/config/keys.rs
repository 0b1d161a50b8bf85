//! Keybindings for the branch selection list

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered from the selection list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the cursor up one branch
    CursorUp,
    /// Move the cursor down one branch
    CursorDown,
    /// Jump to the first branch
    CursorTop,
    /// Jump to the last branch
    CursorBottom,
    /// Toggle selection of the branch under the cursor
    Toggle,
    /// Ask to delete the selected branches
    Delete,
    /// Leave without deleting anything
    Quit,
}

impl Action {
    /// Short label used in the key hint line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CursorUp => "up",
            Self::CursorDown => "down",
            Self::CursorTop => "top",
            Self::CursorBottom => "bottom",
            Self::Toggle => "toggle",
            Self::Delete => "delete selected",
            Self::Quit => "quit",
        }
    }

    /// Actions shown in the key hint line, in display order
    pub const HINTED: &'static [Self] = &[
        Self::CursorUp,
        Self::CursorDown,
        Self::Toggle,
        Self::Delete,
        Self::Quit,
    ];
}

/// Keybinding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("Up".to_string(), Action::CursorUp);
        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("Down".to_string(), Action::CursorDown);
        bindings.insert("g".to_string(), Action::CursorTop);
        bindings.insert("Home".to_string(), Action::CursorTop);
        bindings.insert("G".to_string(), Action::CursorBottom);
        bindings.insert("End".to_string(), Action::CursorBottom);
        bindings.insert(" ".to_string(), Action::Toggle);
        bindings.insert("Enter".to_string(), Action::Toggle);
        bindings.insert("d".to_string(), Action::Delete);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Esc".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Single characters first, then named keys
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            b_simple.cmp(&a_simple).then_with(|| a.cmp(b))
        });
        keys.iter()
            .map(|k| if k == " " { "Space" } else { k.as_str() })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Hint line for the selection list, e.g. `k/Up: up • j/Down: down`
    #[must_use]
    pub fn hints(&self) -> String {
        Action::HINTED
            .iter()
            .map(|&action| format!("{}: {}", self.format_keys(action), action.label()))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
