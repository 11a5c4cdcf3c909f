//! Opponent paddle controller
//!
//! Chases the ball's centre at a capped speed. No prediction and no
//! randomness; the speed cap alone is what keeps it beatable.

use super::state::{Ball, Paddle};

/// Top-edge position that lines the paddle's centre up with the ball's
pub fn target_y(ball: &Ball, paddle: &Paddle) -> f32 {
    ball.pos.y + ball.size / 2.0 - paddle.height / 2.0
}

/// Advance `paddle` one frame toward the ball, never overshooting the target,
/// then clamp it inside the surface.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, speed: f32, surface_height: f32) {
    let target = target_y(ball, paddle);

    let mut y = paddle.y;
    if y < target {
        y = (y + speed).min(target);
    } else if y > target {
        y = (y - speed).max(target);
    }

    paddle.move_to(y, surface_height);
}
