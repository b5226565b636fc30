//! Game state and core simulation types
//!
//! Everything the tick function reads or writes lives here, so a round can be
//! stepped and inspected without a canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{BrickLayout, GameConfig};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball pinned above the paddle, waiting for a primary click
    AwaitingLaunch,
    /// Ball moves under its velocity
    Running,
    /// Every brick destroyed
    RoundWon,
    /// Last life lost
    GameOver,
}

impl GamePhase {
    /// Won and lost rounds accept no further ticks
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::RoundWon | GamePhase::GameOver)
    }

    /// Blocking notification shown by the shell when the round ends
    pub fn terminal_message(&self) -> Option<&'static str> {
        match self {
            GamePhase::RoundWon => Some("YOU WIN, CONGRATULATIONS!"),
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::AwaitingLaunch | GamePhase::Running => None,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    BrickDestroyed { column: usize, row: usize },
    LifeLost { lives_left: u8 },
    RoundWon,
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Centre, canvas pixels
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Self::spawn_pos(config),
            vel: config.launch_velocity,
            radius: config.ball_radius,
        }
    }

    fn spawn_pos(config: &GameConfig) -> Vec2 {
        Vec2::new(
            config.canvas_width / 2.0,
            config.canvas_height - crate::consts::BALL_SPAWN_OFFSET,
        )
    }

    /// Back to the serve position with the launch velocity
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = Self::spawn_pos(config);
        self.vel = config.launch_velocity;
    }

    /// Sit on top of the paddle's centre; velocity is left untouched
    pub fn pin_to(&mut self, paddle: &Paddle, canvas_height: f32) {
        self.pos = Vec2::new(
            paddle.center_x(),
            canvas_height - paddle.height - self.radius,
        );
    }

    /// Where the ball will be after this tick if nothing deflects it
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle, resting on the bottom edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred horizontally
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: (config.canvas_width - config.paddle_width) / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self, canvas_height: f32) -> Rect {
        Rect::new(self.x, canvas_height - self.height, self.width, self.height)
    }

    /// Centre the paddle under an absolute pointer position.
    ///
    /// Positions outside the open interval `(0, canvas_width)` are ignored.
    /// Returns whether the paddle moved.
    pub fn follow_pointer(&mut self, pointer_x: f32, canvas_width: f32) -> bool {
        if pointer_x > 0.0 && pointer_x < canvas_width {
            self.x = pointer_x - self.width / 2.0;
            true
        } else {
            false
        }
    }

    /// Keyboard nudge, clamped to `[0, canvas_width - width]`
    pub fn nudge(&mut self, direction: f32, step: f32, canvas_width: f32) {
        let max_x = canvas_width - self.width;
        if direction > 0.0 && self.x < max_x {
            self.x = (self.x + step).min(max_x);
        } else if direction < 0.0 && self.x > 0.0 {
            self.x = (self.x - step).max(0.0);
        }
    }
}

/// Brick status only ever moves from `Active` to `Destroyed` within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Active,
    Destroyed,
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    pub fn destroy(&mut self) {
        self.status = BrickStatus::Destroyed;
    }
}

/// Fixed columns x rows grid, stored column-major
///
/// Positions are assigned once here and never change; only status mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickLayout) -> Self {
        let mut bricks = Vec::with_capacity(layout.total());
        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let origin = layout.cell_origin(column, row);
                bricks.push(Brick {
                    column,
                    row,
                    rect: Rect::new(origin.x, origin.y, layout.width, layout.height),
                    status: BrickStatus::Active,
                });
            }
        }
        Self {
            columns: layout.columns,
            rows: layout.rows,
            bricks,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then_some(column * self.rows + row)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.index(column, row).map(|i| &self.bricks[i])
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        self.index(column, row).map(move |i| &mut self.bricks[i])
    }

    /// Column-major, rows ascending within a column
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this round
    pub score: u32,
    pub lives: u8,
}

impl GameState {
    /// Fresh round: full grid, full lives, ball waiting on the paddle
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            ball: Ball::new(&config),
            paddle: Paddle::centered(&config),
            bricks: BrickGrid::new(&config.bricks),
            phase: GamePhase::AwaitingLaunch,
            score: 0,
            lives: config.start_lives,
            config,
        };
        state.ball.pin_to(&state.paddle, state.config.canvas_height);
        state
    }

    /// After a miss with lives left: recentre ball and paddle, await launch.
    /// Bricks, score and lives are kept.
    pub fn reset_serve(&mut self) {
        self.ball.reset(&self.config);
        self.paddle = Paddle::centered(&self.config);
        self.phase = GamePhase::AwaitingLaunch;
    }

    /// Score that ends the round
    pub fn winning_score(&self) -> u32 {
        self.bricks.len() as u32
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.active_count()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
