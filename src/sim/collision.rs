//! Axis-aligned collision checks between the ball, walls and paddles
//!
//! Everything is a rectangle. Edges touching counts as contact, matching the
//! `<=`/`>=` comparisons the game has always used.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Closed-interval overlap on the y axis
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() >= other.top() && self.top() <= other.bottom()
    }
}

/// Ball touches or crosses the top or bottom wall
pub fn touches_horizontal_wall(ball: &Rect, field_height: f32) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= field_height
}

/// Ball reached the player's (left) paddle face while level with it
pub fn hits_left_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.left() <= paddle.right() && ball.overlaps_vertically(paddle)
}

/// Ball reached the AI's (right) paddle face while level with it
pub fn hits_right_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.right() >= paddle.left() && ball.overlaps_vertically(paddle)
}

/// Vertical velocity after a paddle hit: proportional to how far from the
/// paddle's center the ball struck. Replaces the previous dy outright.
#[inline]
pub fn english(ball: &Rect, paddle: &Rect, factor: f32) -> f32 {
    let collide_point = ball.center().y - paddle.center().y;
    collide_point * factor
}
