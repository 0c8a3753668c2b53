//! Held-key tracking
//!
//! Key-down adds a direction, key-up removes it. The game polls the set once
//! per tick, so a tap shorter than a tick can be missed.

use std::collections::HashSet;

use crate::sim::{Direction, InputSource};

/// Directions currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Direction>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.held.insert(direction);
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.remove(&direction);
    }

    /// Drop everything (focus lost)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Map a host key name to a steering direction
    pub fn direction_for_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" | "Left" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "Right" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = HeldKeys::new();
        keys.press(Direction::Left);
        keys.press(Direction::Right);
        assert!(keys.is_held(Direction::Left));
        assert!(keys.is_held(Direction::Right));

        keys.release(Direction::Left);
        assert!(!keys.is_held(Direction::Left));
        assert!(keys.is_held(Direction::Right));

        keys.release_all();
        assert!(!keys.is_held(Direction::Right));
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut keys = HeldKeys::new();
        keys.press(Direction::Left);
        keys.press(Direction::Left);
        keys.release(Direction::Left);
        assert!(!keys.is_held(Direction::Left));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(HeldKeys::direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(HeldKeys::direction_for_key("d"), Some(Direction::Right));
        assert_eq!(HeldKeys::direction_for_key("Space"), None);
    }
}
