//! Built-in settings
//!
//! gelete reads no configuration files; everything here is a compiled-in
//! default.

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long to wait for terminal input before redrawing, in milliseconds
    pub poll_interval_ms: u64,

    /// Keybindings for the selection list
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}
