//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame. Velocities are in
//! units per frame, so there is no dt.

use super::ai::track_ball;
use super::collision::{collide_paddle, collide_walls, scoring_side};
use super::state::{GameState, Side};

/// Paddles that touched the ball this frame. Both can fire in one frame
/// when the ball overlaps the two paddles at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleHits {
    pub left: bool,
    pub right: bool,
}

impl PaddleHits {
    pub fn any(&self) -> bool {
        self.left || self.right
    }

    pub fn count(&self) -> u32 {
        u32::from(self.left) + u32::from(self.right)
    }

    fn record(&mut self, side: Side) {
        match side {
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }
}

/// What happened during a frame (for logging and host feedback)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Ball bounced off the top or bottom edge
    pub wall_bounce: bool,
    pub paddle_hits: PaddleHits,
    /// Side awarded a point
    pub scored: Option<Side>,
}

/// Ball physics for one frame: integrate, walls, left paddle, right paddle,
/// scoring. Order matters since later checks overwrite earlier responses.
pub fn step_physics(state: &mut GameState) -> FrameEvents {
    let mut events = FrameEvents::default();
    let height = state.height();

    state.ball.pos += state.ball.vel;

    events.wall_bounce = collide_walls(&mut state.ball, height).any();

    for side in [Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        if collide_paddle(&mut state.ball, &paddle, side, &state.tuning) {
            log::debug!(
                "{:?} paddle hit, ball speed now {:.2}",
                side,
                state.ball.vel.x.abs()
            );
            events.paddle_hits.record(side);
        }
    }

    if let Some(side) = scoring_side(&state.ball, state.width()) {
        state.score.award(side);
        state.reset_ball();
        log::info!(
            "{:?} scores ({} - {})",
            side,
            state.score.left,
            state.score.right
        );
        events.scored = Some(side);
    }

    events
}

/// Advance the game state by one frame: ball physics, then the AI paddle
pub fn tick(state: &mut GameState) -> FrameEvents {
    state.time_ticks += 1;

    let events = step_physics(state);

    let height = state.height();
    let speed = state.tuning.ai_speed;
    track_ball(&mut state.right, &state.ball, speed, height);

    events
}
