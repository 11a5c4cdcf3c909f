//! Game state and core simulation types
//!
//! Entities are plain data. The only behaviour beyond construction is
//! re-serving the ball after a point.

use glam::Vec2;
use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_paddle_y;
use crate::tuning::{Tuning, TuningError};

/// Which half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled
    Left,
    /// AI-controlled
    Right,
}

/// A paddle. `x` is fixed for the paddle's side, `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Displacement applied by the most recent move
    pub dy: f32,
}

impl Paddle {
    /// Vertically centred paddle for `side`
    pub fn new(side: Side, surface: Vec2, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Left => tuning.paddle_margin,
            Side::Right => surface.x - tuning.paddle_margin - tuning.paddle_width,
        };
        Self {
            x,
            y: surface.y / 2.0 - tuning.paddle_height / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            dy: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move the top edge to `y`, clamped inside the surface
    pub fn move_to(&mut self, y: f32, surface_height: f32) {
        let y = clamp_paddle_y(y, self.height, surface_height);
        self.dy = y - self.y;
        self.y = y;
    }
}

/// The ball: a square with its top-left corner at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Ball at rest at the centre of the surface
    pub fn centered(surface: Vec2, size: f32) -> Self {
        Self {
            pos: Self::center_pos(surface, size),
            vel: Vec2::ZERO,
            size,
        }
    }

    fn center_pos(surface: Vec2, size: f32) -> Vec2 {
        Vec2::new(surface.x / 2.0 - size / 2.0, surface.y / 2.0 - size / 2.0)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Re-serve from the exact centre.
    ///
    /// dx is ±serve_speed with equal odds, dy is uniform in
    /// [-|serve_spread|, |serve_spread|]. A spread that cannot form a range
    /// (NaN, infinite) serves flat.
    pub fn reset<R: Rng>(&mut self, surface: Vec2, tuning: &Tuning, rng: &mut R) {
        self.pos = Self::center_pos(surface, self.size);
        let dx = if rng.random_bool(0.5) {
            tuning.serve_speed
        } else {
            -tuning.serve_speed
        };
        let spread = tuning.serve_spread.abs();
        let dy = Uniform::new_inclusive(-spread, spread)
            .map(|dist| rng.sample(dist))
            .unwrap_or(0.0);
        self.vel = Vec2::new(dx, dy);
    }
}

/// Points per side. Never reset while the game runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Award a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete simulation context, owned by the game loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Surface size (width, height)
    pub surface: Vec2,
    pub tuning: Tuning,
    /// Pointer-controlled paddle
    pub left: Paddle,
    /// AI-controlled paddle
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// New game with default tuning on a `width` x `height` surface
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::build(Vec2::new(width, height), Tuning::default(), seed)
    }

    /// New game with custom tuning, rejecting values the simulation cannot use
    pub fn with_tuning(
        width: f32,
        height: f32,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        tuning.check_surface(width, height)?;
        Ok(Self::build(Vec2::new(width, height), tuning, seed))
    }

    fn build(surface: Vec2, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::centered(surface, tuning.ball_size);
        ball.reset(surface, &tuning, &mut rng);

        Self {
            seed,
            surface,
            left: Paddle::new(Side::Left, surface, &tuning),
            right: Paddle::new(Side::Right, surface, &tuning),
            ball,
            score: Score::default(),
            time_ticks: 0,
            tuning,
            rng,
        }
    }

    pub fn width(&self) -> f32 {
        self.surface.x
    }

    pub fn height(&self) -> f32 {
        self.surface.y
    }

    /// Re-serve the ball from the centre using the game's RNG
    pub fn reset_ball(&mut self) {
        self.ball.reset(self.surface, &self.tuning, &mut self.rng);
    }

    /// Paddle for `side`
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(800.0, 500.0, 1);
        assert_eq!(state.left.x, 18.0);
        assert_eq!(state.right.x, 800.0 - 18.0 - 12.0);
        assert_eq!(state.left.y, 210.0);
        assert_eq!(state.right.y, 210.0);
        assert_eq!(state.ball.pos, Vec2::new(393.0, 243.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_serve_distribution() {
        let mut state = GameState::new(800.0, 500.0, 7);
        for _ in 0..200 {
            state.reset_ball();
            assert!(state.ball.vel.x == 4.0 || state.ball.vel.x == -4.0);
            assert!((-3.0..=3.0).contains(&state.ball.vel.y));
        }
    }

    #[test]
    fn test_serve_uses_both_directions() {
        let mut state = GameState::new(800.0, 500.0, 3);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..100 {
            state.reset_ball();
            seen_left |= state.ball.vel.x < 0.0;
            seen_right |= state.ball.vel.x > 0.0;
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn test_serve_survives_unvalidated_spread() {
        let mut state = GameState::new(800.0, 500.0, 11);

        state.tuning.serve_spread = -1.0;
        for _ in 0..50 {
            state.reset_ball();
            assert!((-1.0..=1.0).contains(&state.ball.vel.y));
        }

        for spread in [f32::NAN, f32::INFINITY, f32::MAX, 0.0] {
            state.tuning.serve_spread = spread;
            state.reset_ball();
            assert!(state.ball.vel.y.is_finite());
            assert_eq!(state.ball.pos, Vec2::new(393.0, 243.0));
        }
    }

    #[test]
    fn test_flat_serve() {
        let tuning = Tuning {
            serve_spread: 0.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(800.0, 500.0, tuning, 5).unwrap();
        for _ in 0..20 {
            state.reset_ball();
            assert_eq!(state.ball.vel.y, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(800.0, 500.0, 42);
        let b = GameState::new(800.0, 500.0, 42);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_paddle_move_to_clamps_and_records_dy() {
        let mut paddle = Paddle::new(Side::Left, Vec2::new(800.0, 500.0), &Tuning::default());
        paddle.move_to(600.0, 500.0);
        assert_eq!(paddle.y, 420.0);
        assert_eq!(paddle.dy, 210.0);
        paddle.move_to(-5.0, 500.0);
        assert_eq!(paddle.y, 0.0);
        assert_eq!(paddle.dy, -420.0);
    }

    #[test]
    fn test_with_tuning_rejects_tiny_surface() {
        let result = GameState::with_tuning(800.0, 60.0, Tuning::default(), 1);
        assert!(matches!(result, Err(TuningError::SurfaceTooSmall { .. })));
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score, Score { left: 1, right: 2 });
    }
}
