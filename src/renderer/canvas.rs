//! 2D canvas surface (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Shape, Surface};
use crate::error::InitError;

/// The game canvas and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` and its 2D context
    pub fn from_document(id: &str) -> Result<Self, InitError> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| InitError::CanvasNotFound(id.to_string()))?;

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InitError::ContextUnavailable)?;

        Ok(Self { canvas, context })
    }

    pub fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    /// Canvas left edge in client coordinates (pointer x is relative to it)
    pub fn offset_left(&self) -> f32 {
        self.canvas.offset_left() as f32
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill(&mut self, shape: &Shape, color: &str) {
        let ctx = &self.context;
        ctx.begin_path();
        match *shape {
            Shape::Circle { center, radius } => {
                if let Err(e) = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                ) {
                    log::warn!("arc failed: {:?}", e);
                }
            }
            Shape::Rect(rect) => {
                ctx.rect(
                    rect.left() as f64,
                    rect.top() as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                );
            }
        }
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.close_path();
    }
}
