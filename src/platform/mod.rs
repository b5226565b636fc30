//! Platform abstraction layer
//!
//! Maps raw browser input (key names, button codes, client coordinates) onto
//! simulation input. The DOM glue itself lives in `web` and only builds for
//! wasm32.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::HeldKeys;

/// Logical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `KeyboardEvent.key` values, including the legacy IE/Edge names
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Right" | "ArrowRight" => Some(Direction::Right),
            "Left" | "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Record a key press or release. Returns false for keys the game ignores.
pub fn apply_key(keys: &mut HeldKeys, key: &str, pressed: bool) -> bool {
    match Direction::from_key(key) {
        Some(Direction::Right) => {
            keys.right = pressed;
            true
        }
        Some(Direction::Left) => {
            keys.left = pressed;
            true
        }
        None => false,
    }
}

/// Pointer x relative to the canvas left edge
#[inline]
pub fn canvas_relative_x(client_x: f32, canvas_offset_left: f32) -> f32 {
    client_x - canvas_offset_left
}
