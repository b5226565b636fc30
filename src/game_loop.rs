//! Fixed-tick scheduler
//!
//! Owns the round between display frames. Input handlers only record intent
//! here; `frame` turns elapsed time into whole simulation ticks, and the shell
//! renders afterwards. A terminal phase stops ticking and is reported to the
//! caller, which decides how to restart.

use crate::config::GameConfig;
use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::platform;
use crate::renderer::{self, Hud, Surface};
use crate::sim::{GameEvent, GamePhase, GameState, MouseButton, TickInput, tick};

/// Frames averaged for the FPS estimate
const FPS_WINDOW: usize = 60;
/// Frame times this close to `TICK_DT` count as exactly one tick (seconds)
const VSYNC_SNAP: f32 = 0.001;

/// Result of advancing one display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep scheduling frames
    Running,
    /// Round over; carries `RoundWon` or `GameOver`
    Finished(GamePhase),
}

/// Game instance holding all state
pub struct GameLoop {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    /// Events from the most recent frame
    events: Vec<GameEvent>,
    ticks: u64,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            input: TickInput::default(),
            accumulator: 0.0,
            events: Vec::new(),
            ticks: 0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for shells and tests that stage a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Ticks simulated since the last (re)start
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Fresh round with the same config, held keys kept
    pub fn restart(&mut self) {
        let config = self.state.config.clone();
        self.state = GameState::new(config);
        self.input.pointer_x = None;
        self.input.pointer_down = None;
        self.accumulator = 0.0;
        self.ticks = 0;
        self.events.clear();
        log::info!("Round restarted");
    }

    // === Input (recorded, applied on the next tick) ===

    /// Pointer position relative to the canvas left edge
    pub fn pointer_moved(&mut self, x: f32) {
        self.input.pointer_x = Some(x);
    }

    /// DOM `MouseEvent.button` code
    pub fn pointer_down(&mut self, button_code: i16) {
        self.input.pointer_down = Some(MouseButton::from_code(button_code));
    }

    /// Returns false for keys the game does not use
    pub fn key(&mut self, key: &str, pressed: bool) -> bool {
        platform::apply_key(&mut self.input.keys, key, pressed)
    }

    // === Scheduling ===

    /// Run exactly one tick, consuming one-shot input
    pub fn step(&mut self) -> Vec<GameEvent> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        let events = tick(&mut self.state, &self.input);
        self.ticks += 1;

        // Clear one-shot inputs after processing
        self.input.pointer_x = None;
        self.input.pointer_down = None;

        events
    }

    /// Advance by `dt` seconds of wall time. `time` (ms) feeds the FPS estimate.
    pub fn frame(&mut self, dt: f32, time: f64) -> FrameOutcome {
        self.events.clear();

        let mut dt = dt.clamp(0.0, 0.1);
        // Display refresh jitter must not split ticks into 0/2 per frame
        if (dt - TICK_DT).abs() < VSYNC_SNAP {
            dt = TICK_DT;
        }
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let events = self.step();
            self.events.extend(events);
            self.accumulator -= TICK_DT;
            substeps += 1;
            if self.state.is_terminal() {
                self.accumulator = 0.0;
                break;
            }
        }

        self.track_fps(time);
        self.outcome()
    }

    fn track_fps(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one about to be overwritten
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn outcome(&self) -> FrameOutcome {
        if self.state.is_terminal() {
            FrameOutcome::Finished(self.state.phase)
        } else {
            FrameOutcome::Running
        }
    }

    /// Draw the current state
    pub fn render<S: Surface + ?Sized, H: Hud + ?Sized>(&self, surface: &mut S, hud: &mut H) {
        renderer::draw_frame(&self.state, surface, hud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Recorder;
    use glam::Vec2;

    #[test]
    fn test_frame_runs_whole_ticks() {
        let mut game = GameLoop::new(GameConfig::default());
        game.pointer_down(0);

        assert_eq!(game.frame(TICK_DT, 16.0), FrameOutcome::Running);
        assert_eq!(game.ticks(), 1);
        assert_eq!(game.events(), &[GameEvent::Launched]);
        assert_eq!(game.state().ball.pos, Vec2::new(242.0, 298.0));

        // Half a tick: nothing simulated yet
        game.frame(TICK_DT * 0.5, 24.0);
        assert_eq!(game.ticks(), 1);
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_jittery_60hz_frames_tick_once_each() {
        let mut game = GameLoop::new(GameConfig::default());
        let mut time = 0.0;
        for i in 0..600 {
            let dt = if i % 2 == 0 { 0.0166 } else { 0.0167334 };
            time += dt as f64 * 1000.0;
            let before = game.ticks();
            game.frame(dt, time);
            assert_eq!(game.ticks() - before, 1, "frame {} ran a different tick count", i);
        }
        assert_eq!(game.ticks(), 600);
    }

    #[test]
    fn test_fast_display_ticks_every_other_frame() {
        let mut game = GameLoop::new(GameConfig::default());
        for i in 1..=120 {
            game.frame(1.0 / 120.0, i as f64 * 1000.0 / 120.0);
        }
        assert!((59..=60).contains(&game.ticks()));
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut game = GameLoop::new(GameConfig::default());
        game.frame(5.0, 16.0);
        // Clamped to 0.1 s: about 6 ticks, never the full 5 s worth
        assert!((5..=6).contains(&game.ticks()));
    }

    #[test]
    fn test_one_shot_input_is_consumed() {
        let mut game = GameLoop::new(GameConfig::default());
        game.pointer_moved(100.0);
        game.step();
        assert_eq!(game.state().paddle.x, 62.5);

        // Keyboard moves it; the old pointer position is not re-applied
        game.key("ArrowRight", true);
        game.step();
        assert_eq!(game.state().paddle.x, 69.5);
        game.key("ArrowRight", false);
        game.step();
        assert_eq!(game.state().paddle.x, 69.5);
    }

    #[test]
    fn test_right_click_does_not_launch() {
        let mut game = GameLoop::new(GameConfig::default());
        game.pointer_down(2);
        game.step();
        assert_eq!(game.state().phase, GamePhase::AwaitingLaunch);
    }

    #[test]
    fn test_finished_stops_ticking_until_restart() {
        let mut game = GameLoop::new(GameConfig::default());
        let state = game.state_mut();
        state.phase = GamePhase::Running;
        state.lives = 1;
        state.ball.pos = Vec2::new(20.0, 310.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);

        assert_eq!(
            game.frame(TICK_DT * 3.0, 16.0),
            FrameOutcome::Finished(GamePhase::GameOver)
        );
        assert_eq!(game.ticks(), 1);
        assert_eq!(
            game.frame(TICK_DT, 32.0),
            FrameOutcome::Finished(GamePhase::GameOver)
        );
        assert_eq!(game.ticks(), 1);

        game.restart();
        assert_eq!(game.outcome(), FrameOutcome::Running);
        assert_eq!(game.state().lives, 3);
        assert_eq!(game.state().bricks_remaining(), 15);
    }

    #[test]
    fn test_render_reports_hud() {
        let game = GameLoop::new(GameConfig::default());
        let mut surface = Recorder::new();
        let mut hud = Recorder::new();
        game.render(&mut surface, &mut hud);
        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.lives, "Lives: 3");
        assert_eq!(surface.last_frame().len(), 17);
    }

    #[test]
    fn test_fps_estimate() {
        let mut game = GameLoop::new(GameConfig::default());
        for i in 1..=120 {
            game.frame(0.0, i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(game.fps(), 60);
    }
}
