//! Input mapping
//!
//! Turns key presses into simulation actions. Only the press edge counts:
//! releases and auto-repeat never trigger anything.

use serde::{Deserialize, Serialize};

/// Something the user asked the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    ToggleDetector,
}

/// Key state reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Character key that flips detector mode, matched case-insensitively.
    pub toggle_detector: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_detector: 'd',
        }
    }
}

impl KeyBindings {
    /// Action bound to `text` (the key's logical character), if any.
    pub fn action_for(&self, text: &str, state: KeyState, repeat: bool) -> Option<InputAction> {
        if state != KeyState::Pressed || repeat {
            return None;
        }

        let mut chars = text.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        key.to_lowercase()
            .eq(self.toggle_detector.to_lowercase())
            .then_some(InputAction::ToggleDetector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_toggles() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action_for("d", KeyState::Pressed, false),
            Some(InputAction::ToggleDetector)
        );
        assert_eq!(
            bindings.action_for("D", KeyState::Pressed, false),
            Some(InputAction::ToggleDetector)
        );
    }

    #[test]
    fn only_the_press_edge_counts() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for("d", KeyState::Released, false), None);
        assert_eq!(bindings.action_for("d", KeyState::Pressed, true), None);
    }

    #[test]
    fn other_keys_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for("f", KeyState::Pressed, false), None);
        assert_eq!(bindings.action_for("", KeyState::Pressed, false), None);
        assert_eq!(bindings.action_for("dd", KeyState::Pressed, false), None);
    }

    #[test]
    fn rebinding() {
        let bindings = KeyBindings {
            toggle_detector: 'x',
        };
        assert_eq!(bindings.action_for("d", KeyState::Pressed, false), None);
        assert!(bindings.action_for("X", KeyState::Pressed, false).is_some());
    }
}
