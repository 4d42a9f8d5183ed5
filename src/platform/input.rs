//! Keyboard state
//!
//! The host records every key press/release here; once per frame the state is
//! folded into a `TickInput` through the configured bindings.

use std::collections::HashMap;

use crate::settings::KeyBindings;
use crate::sim::TickInput;

/// Pressed/released state per key name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, down: bool) {
        self.pressed.insert(key.to_string(), down);
    }

    /// Record a `keydown`. Auto-repeat events for a held key are ignored so a
    /// consumed key stays consumed until it is released and pressed again.
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        if !repeat {
            self.set(key, true);
        }
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    fn any_down(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.is_down(k))
    }

    /// True if any of `keys` is down. Those keys are then marked released,
    /// so a press is reported once.
    pub fn take_pressed(&mut self, keys: &[String]) -> bool {
        let pressed = self.any_down(keys);
        if pressed {
            for key in keys {
                self.set(key, false);
            }
        }
        pressed
    }

    /// Build this frame's input. Confirm keys are consumed, so holding one
    /// down fires confirm once until it is pressed again.
    pub fn take_input(&mut self, bindings: &KeyBindings) -> TickInput {
        let confirm = self.take_pressed(&bindings.confirm);

        TickInput {
            up: self.any_down(&bindings.up),
            down: self.any_down(&bindings.down),
            confirm,
        }
    }

    /// Forget everything (e.g. when the canvas loses focus)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();

        assert_eq!(keys.take_input(&bindings), TickInput::default());

        keys.set("w", true);
        assert!(keys.take_input(&bindings).up);

        keys.set("w", false);
        keys.set("ArrowDown", true);
        let input = keys.take_input(&bindings);
        assert!(!input.up && input.down);

        // Held keys stay held across frames
        assert!(keys.take_input(&bindings).down);
    }

    #[test]
    fn test_confirm_is_consumed() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();

        keys.set("Enter", true);
        assert!(keys.take_input(&bindings).confirm);
        assert!(!keys.take_input(&bindings).confirm);
        assert!(!keys.is_down("Enter"));

        keys.set("Enter", true);
        assert!(keys.take_input(&bindings).confirm);
    }

    #[test]
    fn test_auto_repeat_does_not_rearm_confirm() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();

        keys.key_down("Enter", false);
        assert!(keys.take_input(&bindings).confirm);

        // Browser repeats while Enter stays held
        keys.key_down("Enter", true);
        keys.key_down("Enter", true);
        assert!(!keys.take_input(&bindings).confirm);

        keys.set("Enter", false);
        keys.key_down("Enter", false);
        assert!(keys.take_input(&bindings).confirm);
    }

    #[test]
    fn test_repeat_keeps_movement_held() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.key_down("ArrowUp", false);
        keys.key_down("ArrowUp", true);
        assert!(keys.take_input(&bindings).up);
        assert!(keys.take_input(&bindings).up);
    }

    #[test]
    fn test_mute_key_reported_once() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.key_down("m", false);
        assert!(keys.take_pressed(&bindings.mute));
        assert!(!keys.take_pressed(&bindings.mute));
        // Mute is not part of the simulation input
        keys.key_down("M", false);
        assert_eq!(keys.take_input(&bindings), TickInput::default());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.set("q", true);
        keys.set(" ", true);
        assert_eq!(keys.take_input(&bindings), TickInput::default());
    }

    #[test]
    fn test_clear() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.set("s", true);
        keys.clear();
        assert!(!keys.take_input(&bindings).down);
    }
}
