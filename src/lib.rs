//! Brick Breaker - a canvas ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `platform`: Browser input mapping and web glue
//! - `game_loop`: Fixed-tick scheduler that owns the state between frames
//! - `config`: Data-driven layout and persisted preferences

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{BrickLayout, GameConfig};
pub use error::{ConfigError, InitError};
pub use game_loop::{FrameOutcome, GameLoop};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch velocity in pixels per tick
    pub const BALL_LAUNCH_DX: f32 = 2.0;
    pub const BALL_LAUNCH_DY: f32 = -2.0;
    /// Spawn height above the bottom edge
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Keyboard nudge per tick
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Player lives at the start of a game
    pub const START_LIVES: u8 = 3;

    /// Single fill colour for every shape
    pub const FILL_COLOR: &str = "#0095DD";
}
