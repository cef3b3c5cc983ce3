//! Input management system
//!
//! Tracks which keys are held and which changed state this frame. Edge
//! state (`just_pressed` / `just_released`) lives for exactly one frame.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    down: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
    released_this_frame: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's edges; call once before feeding new events
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Auto-repeat delivers presses for held keys; only the first counts
            if self.down.insert(key) {
                self.pressed_this_frame.insert(key);
            }
        } else if self.down.remove(&key) {
            self.released_this_frame.insert(key);
        }
    }

    /// Whether the key is held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Whether the key went down this frame
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Whether the key went up this frame
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.released_this_frame.contains(&key)
    }

    /// Release every key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        let held: Vec<KeyCode> = self.down.drain().collect();
        self.released_this_frame.extend(held);
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// X key
    X,
    /// Z key
    Z,
    /// P key
    P,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    const NAMES: [(&'static str, Self); 14] = [
        ("A", Self::A),
        ("D", Self::D),
        ("S", Self::S),
        ("W", Self::W),
        ("X", Self::X),
        ("Z", Self::Z),
        ("P", Self::P),
        ("Space", Self::Space),
        ("Enter", Self::Enter),
        ("Escape", Self::Escape),
        ("Up", Self::Up),
        ("Down", Self::Down),
        ("Left", Self::Left),
        ("Right", Self::Right),
    ];

    /// Config name of the key
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, key)| *key == self)
            .map_or("?", |(name, _)| name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown key name in configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key name: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|(_, key)| *key)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_is_edge_triggered() {
        let mut input = InputManager::new();

        input.begin_frame();
        input.handle_key_input(KeyCode::Z, true);
        assert!(input.just_pressed(KeyCode::Z));
        assert!(input.is_down(KeyCode::Z));

        // Held on the next frame, including an auto-repeat press
        input.begin_frame();
        input.handle_key_input(KeyCode::Z, true);
        assert!(!input.just_pressed(KeyCode::Z));
        assert!(input.is_down(KeyCode::Z));

        input.begin_frame();
        input.handle_key_input(KeyCode::Z, false);
        assert!(input.just_released(KeyCode::Z));
        assert!(!input.is_down(KeyCode::Z));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Up, true);
        input.handle_key_input(KeyCode::Left, true);
        input.begin_frame();
        input.release_all();
        assert!(!input.is_down(KeyCode::Up));
        assert!(input.just_released(KeyCode::Left));
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("Left".parse::<KeyCode>(), Ok(KeyCode::Left));
        assert_eq!("z".parse::<KeyCode>(), Ok(KeyCode::Z));
        assert_eq!(" space ".parse::<KeyCode>(), Ok(KeyCode::Space));
        assert!("F13".parse::<KeyCode>().is_err());
        assert_eq!(KeyCode::Right.to_string(), "Right");
    }
}
