//! Shape generation for 2D primitives

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// A filled primitive in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    Rect(Rect),
}

/// Everything drawn for one frame, back to front: active bricks, ball, paddle
pub fn scene(state: &GameState) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(state.bricks.len() + 2);

    shapes.extend(
        state
            .bricks
            .iter()
            .filter(|b| b.is_active())
            .map(|b| Shape::Rect(b.rect)),
    );

    shapes.push(Shape::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
    });

    shapes.push(Shape::Rect(state.paddle.rect(state.config.canvas_height)));

    shapes
}
