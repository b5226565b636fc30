//! Game layout and tuning
//!
//! Persisted separately from any game state in LocalStorage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Brick grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub columns: usize,
    pub rows: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl BrickLayout {
    /// Total bricks in the grid (the winning score)
    pub fn total(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of the brick at (column, row)
    pub fn cell_origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }

    /// Right edge of the last column
    pub fn right_extent(&self) -> f32 {
        self.offset_left + self.columns as f32 * (self.width + self.padding) - self.padding
    }
}

/// Everything that shapes a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Surface ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity restored on every (re)serve, pixels per tick
    pub launch_velocity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard nudge per tick
    pub paddle_step: f32,

    // === Bricks ===
    pub bricks: BrickLayout,

    // === Rules ===
    pub start_lives: u8,

    // === Presentation ===
    pub fill_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ball_radius: BALL_RADIUS,
            launch_velocity: Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY),
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            bricks: BrickLayout::default(),
            start_lives: START_LIVES,
            fill_color: FILL_COLOR.to_string(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_config";

    /// Adopt the size of the real drawing surface
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject layouts the simulation cannot play
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid("canvas dimensions must be positive"));
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::Invalid("ball radius must be positive"));
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::Invalid("paddle dimensions must be positive"));
        }
        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::Invalid("paddle is wider than the canvas"));
        }
        if self.paddle_step < 0.0 {
            return Err(ConfigError::Invalid("paddle step must not be negative"));
        }
        let b = &self.bricks;
        if b.columns == 0 || b.rows == 0 {
            return Err(ConfigError::Invalid("brick grid must have at least one cell"));
        }
        if !(b.width > 0.0 && b.height > 0.0) {
            return Err(ConfigError::Invalid("brick dimensions must be positive"));
        }
        if b.right_extent() > self.canvas_width {
            return Err(ConfigError::Invalid("brick grid does not fit the canvas"));
        }
        if self.start_lives == 0 {
            return Err(ConfigError::Invalid("a game needs at least one life"));
        }
        Ok(())
    }

    /// Config from a stored JSON blob, defaults when absent or unusable
    pub fn from_stored(json: Option<&str>) -> Self {
        if let Some(json) = json {
            match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded stored config");
                    return config;
                }
                Err(e) => log::warn!("Ignoring stored config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        Self::from_stored(json.as_deref())
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Config saved");
                }
                Err(e) => log::warn!("Config not saved: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_stored(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
