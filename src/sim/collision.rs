//! Collision detection
//!
//! Pure checks against the current or projected ball position. The tick
//! applies the responses (velocity flips, brick destruction, life loss).

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, BrickGrid};

/// What the ball meets on the vertical axis this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Nothing in the way
    Clear,
    /// Projected position is above the top wall
    TopWall,
    /// Reached the bottom with its centre over the paddle
    Paddle,
    /// Reached the bottom outside the paddle span
    Miss,
}

/// First active brick (column-major, rows ascending) whose box strictly
/// contains `point`
pub fn find_brick_hit(bricks: &BrickGrid, point: Vec2) -> Option<(usize, usize)> {
    bricks
        .iter()
        .find(|b| b.is_active() && b.rect.contains_point(point))
        .map(|b| (b.column, b.row))
}

/// Whether the projected x leaves `[radius, canvas_width - radius]`
pub fn hits_side_wall(ball: &Ball, canvas_width: f32) -> bool {
    let next_x = ball.projected().x;
    next_x > canvas_width - ball.radius || next_x < ball.radius
}

/// Classify the projected y against the top wall and the bottom threshold.
///
/// The paddle test uses the ball's current x, strictly inside the paddle span.
pub fn vertical_contact(ball: &Ball, paddle: &Rect, canvas_height: f32) -> VerticalContact {
    let next_y = ball.projected().y;
    if next_y < ball.radius {
        VerticalContact::TopWall
    } else if next_y > canvas_height - ball.radius {
        if paddle.spans_x(ball.pos.x) {
            VerticalContact::Paddle
        } else {
            VerticalContact::Miss
        }
    } else {
        VerticalContact::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BrickLayout, GameConfig};

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        let mut ball = Ball::new(&GameConfig::default());
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(dx, dy);
        ball
    }

    #[test]
    fn test_brick_hit_at_centre() {
        let grid = BrickGrid::new(&BrickLayout::default());
        assert_eq!(find_brick_hit(&grid, Vec2::new(67.5, 40.0)), Some((0, 0)));
        assert_eq!(find_brick_hit(&grid, Vec2::new(152.5, 70.0)), Some((1, 1)));
        assert_eq!(find_brick_hit(&grid, Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_brick_hit_skips_destroyed_and_tangent() {
        let mut grid = BrickGrid::new(&BrickLayout::default());
        grid.get_mut(0, 0).unwrap().destroy();
        assert_eq!(find_brick_hit(&grid, Vec2::new(67.5, 40.0)), None);
        // Exactly on the top edge of (1, 0)
        assert_eq!(find_brick_hit(&grid, Vec2::new(150.0, 30.0)), None);
        // Padding gap between columns
        assert_eq!(find_brick_hit(&grid, Vec2::new(110.0, 40.0)), None);
    }

    #[test]
    fn test_side_walls_use_projection() {
        assert!(hits_side_wall(&ball_at(470.0, 100.0, 2.0, -2.0), 480.0));
        assert!(hits_side_wall(&ball_at(10.0, 100.0, -2.0, -2.0), 480.0));
        assert!(!hits_side_wall(&ball_at(468.0, 100.0, 2.0, -2.0), 480.0));
        // Moving away from the wall it touches
        assert!(!hits_side_wall(&ball_at(470.0, 100.0, -2.0, -2.0), 480.0));
    }

    #[test]
    fn test_vertical_contacts() {
        let paddle = Rect::new(202.5, 310.0, 75.0, 10.0);
        assert_eq!(
            vertical_contact(&ball_at(100.0, 10.0, 2.0, -2.0), &paddle, 320.0),
            VerticalContact::TopWall
        );
        assert_eq!(
            vertical_contact(&ball_at(240.0, 309.0, 2.0, 2.0), &paddle, 320.0),
            VerticalContact::Paddle
        );
        assert_eq!(
            vertical_contact(&ball_at(0.0, 310.0, 2.0, 2.0), &paddle, 320.0),
            VerticalContact::Miss
        );
        assert_eq!(
            vertical_contact(&ball_at(240.0, 200.0, 2.0, 2.0), &paddle, 320.0),
            VerticalContact::Clear
        );
        // Exactly on the paddle's left edge is a miss
        assert_eq!(
            vertical_contact(&ball_at(202.5, 309.0, 2.0, 2.0), &paddle, 320.0),
            VerticalContact::Miss
        );
    }
}
