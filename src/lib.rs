//! Canvas Pong - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, AI, scoring)
//! - `platform`: Host input adaptation (pointer → paddle)
//! - `renderer`: Drawing surface abstraction and WebGPU backend
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side of the surface
    pub const PADDLE_MARGIN: f32 = 18.0;

    /// Ball defaults (square side length)
    pub const BALL_SIZE: f32 = 14.0;
    /// Horizontal serve speed, units per frame
    pub const SERVE_SPEED: f32 = 4.0;
    /// Serve vertical speed is uniform in [-SERVE_SPREAD, SERVE_SPREAD]
    pub const SERVE_SPREAD: f32 = 3.0;

    /// Multiplier applied to dx on every paddle hit (sign flip included)
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.07;
    /// dy after a paddle hit = normalized hit offset * this
    pub const PADDLE_HIT_ANGLE: f32 = 5.0;

    /// AI paddle speed cap, units per frame
    pub const AI_SPEED: f32 = 4.4;

    /// Centre net dash pattern (on, off)
    pub const NET_DASH: [f32; 2] = [10.0, 16.0];
    /// Score text size in pixels
    pub const SCORE_FONT_PX: f32 = 32.0;
    /// Score baseline
    pub const SCORE_Y: f32 = 48.0;
    /// Score x offsets from the centre line
    pub const LEFT_SCORE_OFFSET: f32 = -64.0;
    pub const RIGHT_SCORE_OFFSET: f32 = 32.0;

    /// Surface used when the host does not provide one (headless runs)
    pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 500.0;
}

/// Clamp a paddle's top edge into `[0, surface_height - paddle_height]`.
///
/// Lower bound first, then upper, so a surface shorter than the paddle pins
/// the paddle to the bottom instead of panicking like `f32::clamp` would.
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, surface_height: f32) -> f32 {
    let mut y = y;
    if y < 0.0 {
        y = 0.0;
    }
    if y + paddle_height > surface_height {
        y = surface_height - paddle_height;
    }
    y
}
