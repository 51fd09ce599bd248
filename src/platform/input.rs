//! Keyboard state
//!
//! Keys are the host's key identifiers (`"ArrowLeft"`, `"a"`, `" "`...). The
//! simulation polls the set every frame, so there is no distinction between
//! "just pressed" and "held".

use std::collections::HashSet;

/// Fire while held
pub const SHOOT_KEYS: &[&str] = &[" "];
pub const LEFT_KEYS: &[&str] = &["ArrowLeft", "a"];
pub const RIGHT_KEYS: &[&str] = &["ArrowRight", "d"];
/// Thrust forward while held
pub const UP_KEYS: &[&str] = &["ArrowUp", "w"];

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: HashSet<String>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// True if any of `keys` is held
    pub fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }
}
