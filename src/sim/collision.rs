//! Collision detection and response for axis-aligned rectangles
//!
//! Every check compares edges with `<=`/`>=`, so touching counts as a hit.
//! There is no sub-step sweep: a ball fast enough to cross a paddle within one
//! frame passes through it.

use super::state::{Ball, Paddle, Side};
use crate::tuning::Tuning;

/// Which walls the ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.top || self.bottom
    }
}

/// Bounce the ball off the top and bottom edges of the surface.
///
/// Both checks always run. Clamping is idempotent: a second call without
/// integrating in between never moves the ball further out.
pub fn collide_walls(ball: &mut Ball, surface_height: f32) -> WallHits {
    let mut hits = WallHits::default();

    if ball.top() <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hits.top = true;
    }
    if ball.bottom() >= surface_height {
        ball.pos.y = surface_height - ball.size;
        ball.vel.y = -ball.vel.y;
        hits.bottom = true;
    }

    hits
}

/// Whether the ball's vertical extent overlaps the paddle's
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.top() && ball.top() <= paddle.bottom()
}

/// Check and resolve a ball/paddle collision for the paddle on `side`.
///
/// On a hit the ball is placed flush against the paddle face, `dx` is reversed
/// and amplified, and `dy` is replaced by the normalized hit offset scaled by
/// the hit angle. Returns whether the paddle was hit.
pub fn collide_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, tuning: &Tuning) -> bool {
    let reached = match side {
        Side::Left => ball.left() <= paddle.right(),
        Side::Right => ball.right() >= paddle.left(),
    };
    if !reached || !overlaps_vertically(ball, paddle) {
        return false;
    }

    ball.pos.x = match side {
        Side::Left => paddle.right(),
        Side::Right => paddle.left() - ball.size,
    };
    ball.vel.x *= -tuning.paddle_hit_speedup;
    ball.vel.y = hit_offset(ball, paddle) * tuning.paddle_hit_angle;
    true
}

/// Ball centre relative to paddle centre, in half-paddle-heights.
/// 0 at the middle, ±1 at the tips; can exceed 1 on a corner graze.
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0)
}

/// Side that wins the point if the ball has fully left the surface
pub fn scoring_side(ball: &Ball, surface_width: f32) -> Option<Side> {
    if ball.right() < 0.0 {
        Some(Side::Right)
    } else if ball.left() > surface_width {
        Some(Side::Left)
    } else {
        None
    }
}
