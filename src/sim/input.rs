//! Held-key input state
//!
//! The host forwards raw key press/release events between ticks; the
//! simulation queries the resulting held set once per tick. Identifiers are
//! lower-cased on the way in, so `"Shift"` and `"shift"` land on the same
//! entry. Unrecognized keys are tracked like any other but have no effect
//! on gameplay.
//!
//! Single-threaded hosts (the browser event loop) never deliver events
//! mid-tick, so no locking is needed; a multi-threaded port must wrap this
//! in a mutex.

use std::collections::HashSet;

/// Set of currently-depressed key identifiers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Idempotent: repeats from OS auto-repeat are
    /// absorbed by the set.
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    /// Record a key release. A no-op if the key was not held.
    pub fn release(&mut self, key: &str) {
        self.held.remove(key.to_lowercase().as_str());
    }

    /// Whether a key is currently held. `key` must be lower-case.
    #[inline]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Drop everything held. Called on window blur so keys released while
    /// the page is unfocused cannot stick.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_held("w"));

        input.press("w");
        assert!(input.is_held("w"));

        input.release("w");
        assert!(!input.is_held("w"));
    }

    #[test]
    fn test_press_lowercases() {
        let mut input = InputState::new();
        input.press("Shift");
        assert!(input.is_held("shift"));

        input.release("SHIFT");
        assert!(!input.is_held("shift"));
    }

    #[test]
    fn test_idempotent_edges() {
        let mut input = InputState::new();
        input.press("d");
        input.press("d");
        assert!(input.is_held("d"));

        input.release("d");
        input.release("d");
        assert!(!input.is_held("d"));

        // Releasing a key that was never pressed is harmless
        input.release("q");
    }

    #[test]
    fn test_unrecognized_keys_are_tracked() {
        let mut input = InputState::new();
        input.press("F13");
        assert!(input.is_held("f13"));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut input = InputState::new();
        input.press("w");
        input.press("shift");
        input.clear();
        assert!(!input.is_held("w"));
        assert!(!input.is_held("shift"));
    }
}
