//! Axis-aligned rectangles
//!
//! Bricks and the paddle are boxes; the ball is tested as a point (its centre).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its top-left corner (canvas coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Strict containment: a point on any edge is outside
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }

    /// Strict containment on the x axis only
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_point() {
        let r = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert!(r.contains_point(Vec2::new(67.5, 40.0)));
        assert!(r.contains_point(r.center()));
        assert!(!r.contains_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_edges_are_outside() {
        let r = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert!(!r.contains_point(Vec2::new(30.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(105.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(67.5, 30.0)));
        assert!(!r.contains_point(Vec2::new(67.5, 50.0)));
    }

    #[test]
    fn test_spans_x() {
        let r = Rect::new(202.5, 310.0, 75.0, 10.0);
        assert!(r.spans_x(240.0));
        assert!(!r.spans_x(202.5));
        assert!(!r.spans_x(277.5));
        assert!(!r.spans_x(0.0));
    }
}
