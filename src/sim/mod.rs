//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, velocities in units per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::{target_y, track_ball};
pub use collision::{WallHits, collide_paddle, collide_walls, hit_offset, scoring_side};
pub use state::{Ball, GameState, Paddle, Score, Side};
pub use tick::{FrameEvents, PaddleHits, step_physics, tick};
