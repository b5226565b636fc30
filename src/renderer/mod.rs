//! Rendering module
//!
//! The simulation never draws. A frame is composed from `GameState` and
//! pushed to a `Surface` (the 2D canvas in the browser, a `Recorder` in tests)
//! plus a `Hud` for the score and lives text.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{Shape, scene};

use crate::sim::GameState;

/// Something shapes can be filled onto
pub trait Surface {
    /// Wipe the whole drawing area
    fn clear(&mut self);
    /// Fill a single shape with a CSS colour
    fn fill(&mut self, shape: &Shape, color: &str);
}

/// Text sinks for the score and lives readouts
pub trait Hud {
    fn set_score(&mut self, text: &str);
    fn set_lives(&mut self, text: &str);
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_text(lives: u8) -> String {
    format!("Lives: {}", lives)
}

/// Clear, draw every shape in the scene, refresh the HUD
pub fn draw_frame<S: Surface + ?Sized, H: Hud + ?Sized>(
    state: &GameState,
    surface: &mut S,
    hud: &mut H,
) {
    surface.clear();
    let color = state.config.fill_color.as_str();
    for shape in scene(state) {
        surface.fill(&shape, color);
    }
    hud.set_score(&score_text(state.score));
    hud.set_lives(&lives_text(state.lives));
}

/// A draw call captured by `Recorder`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Fill { shape: Shape, color: String },
}

/// Headless surface + HUD that remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
    pub score: String,
    pub lives: String,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the most recent clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill(&mut self, shape: &Shape, color: &str) {
        self.commands.push(DrawCommand::Fill {
            shape: *shape,
            color: color.to_string(),
        });
    }
}

impl Hud for Recorder {
    fn set_score(&mut self, text: &str) {
        self.score = text.to_string();
    }

    fn set_lives(&mut self, text: &str) {
        self.lives = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_frame_records_everything() {
        let state = GameState::default();
        let mut recorder = Recorder::new();
        let mut hud = Recorder::new();
        draw_frame(&state, &mut recorder, &mut hud);

        assert_eq!(recorder.commands[0], DrawCommand::Clear);
        assert_eq!(recorder.last_frame().len(), 17);
        assert!(recorder.last_frame().iter().all(|c| matches!(
            c,
            DrawCommand::Fill { color, .. } if color == "#0095DD"
        )));
        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.lives, "Lives: 3");
    }

    #[test]
    fn test_last_frame_after_two_draws() {
        let mut state = GameState::default();
        let mut surface = Recorder::new();
        let mut hud = Recorder::new();
        draw_frame(&state, &mut surface, &mut hud);

        state.bricks.get_mut(0, 0).unwrap().destroy();
        state.score = 1;
        draw_frame(&state, &mut surface, &mut hud);

        assert_eq!(surface.last_frame().len(), 16);
        assert_eq!(surface.commands.len(), 1 + 17 + 1 + 16);
        assert_eq!(hud.score, "Score: 1");
    }

    #[test]
    fn test_hud_text() {
        assert_eq!(score_text(15), "Score: 15");
        assert_eq!(lives_text(0), "Lives: 0");
    }
}
