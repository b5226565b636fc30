//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, velocities in pixels per tick
//! - Stable iteration order (bricks column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{VerticalContact, find_brick_hit, hits_side_wall, vertical_contact};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{HeldKeys, MouseButton, TickInput, tick};
