//! Fixed timestep simulation tick
//!
//! Core game loop that advances a round deterministically. Within a running
//! tick the order is: bricks, side walls, top wall / paddle / miss, then
//! movement. The keyboard nudge always comes last.

use super::collision::{VerticalContact, find_brick_hit, hits_side_wall, vertical_contact};
use super::state::{GameEvent, GamePhase, GameState};

/// Pointer button that pressed down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left / primary button (DOM button code 0)
    Primary,
    /// Anything else, with its DOM button code
    Other(i16),
}

impl MouseButton {
    pub fn from_code(code: i16) -> Self {
        if code == 0 {
            MouseButton::Primary
        } else {
            MouseButton::Other(code)
        }
    }
}

/// Direction keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// +1 right, -1 left, 0 idle. Right wins when both are held.
    pub fn direction(&self) -> f32 {
        if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x relative to the canvas left edge
    pub pointer_x: Option<f32>,
    /// Pointer button pressed since the last tick
    pub pointer_down: Option<MouseButton>,
    /// Held direction keys
    pub keys: HeldKeys,
}

/// Advance the round by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_terminal() {
        return events;
    }

    // Pointer input lands before the frame runs
    if let Some(x) = input.pointer_x {
        state.paddle.follow_pointer(x, state.config.canvas_width);
    }
    if let Some(button) = input.pointer_down {
        launch(state, button, &mut events);
    }

    match state.phase {
        GamePhase::AwaitingLaunch => {
            state.ball.pin_to(&state.paddle, state.config.canvas_height);
        }
        GamePhase::Running => {
            step_running(state, &mut events);
        }
        GamePhase::RoundWon | GamePhase::GameOver => {}
    }

    if !state.is_terminal() {
        let step = state.config.paddle_step;
        let width = state.config.canvas_width;
        state.paddle.nudge(input.keys.direction(), step, width);
    }

    events
}

/// Start the ball moving. Only a primary press while waiting counts.
pub fn launch(state: &mut GameState, button: MouseButton, events: &mut Vec<GameEvent>) -> bool {
    if button != MouseButton::Primary || state.phase != GamePhase::AwaitingLaunch {
        return false;
    }
    state.phase = GamePhase::Running;
    events.push(GameEvent::Launched);
    log::info!("Ball launched ({} lives left)", state.lives);
    true
}

fn step_running(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if let Some((column, row)) = collide_bricks(state) {
        events.push(GameEvent::BrickDestroyed { column, row });
        if state.score >= state.winning_score() {
            state.phase = GamePhase::RoundWon;
            events.push(GameEvent::RoundWon);
            log::info!("Round won with score {}", state.score);
            return;
        }
    }

    collide_side_walls(state);

    if collide_vertical(state) == VerticalContact::Miss {
        lose_life(state, events);
        return;
    }

    state.ball.advance();
}

/// Destroy at most one brick under the ball's centre, flipping dy.
pub fn collide_bricks(state: &mut GameState) -> Option<(usize, usize)> {
    let (column, row) = find_brick_hit(&state.bricks, state.ball.pos)?;
    let brick = state.bricks.get_mut(column, row)?;
    brick.destroy();
    state.ball.vel.y = -state.ball.vel.y;
    state.score += 1;
    log::debug!("Brick ({}, {}) destroyed, score {}", column, row, state.score);
    Some((column, row))
}

/// Flip dx when the projected x leaves the playfield
pub fn collide_side_walls(state: &mut GameState) -> bool {
    let hit = hits_side_wall(&state.ball, state.config.canvas_width);
    if hit {
        state.ball.vel.x = -state.ball.vel.x;
    }
    hit
}

/// Flip dy off the top wall or the paddle; report a miss untouched
pub fn collide_vertical(state: &mut GameState) -> VerticalContact {
    let paddle = state.paddle.rect(state.config.canvas_height);
    let contact = vertical_contact(&state.ball, &paddle, state.config.canvas_height);
    if matches!(contact, VerticalContact::TopWall | VerticalContact::Paddle) {
        state.ball.vel.y = -state.ball.vel.y;
    }
    contact
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
        log::info!("Game over with score {}", state.score);
    } else {
        log::info!("Life lost, {} remaining", state.lives);
        state.reset_serve();
    }
}
