//! Pointer → left paddle mapping
//!
//! Pointer events arrive independently of frame ticks, possibly several times
//! per frame. Each one moves the paddle immediately; the next tick simply sees
//! the latest position.

use crate::sim::GameState;

/// On-screen rectangle of the drawing surface, in the same coordinate space
/// as pointer events (CSS pixels in a browser).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a pointer's absolute y into surface units.
    ///
    /// The surface may be backed by more pixels than it occupies on screen
    /// (device pixel ratio), so the offset is rescaled to `surface_height`.
    pub fn to_surface_y(&self, client_y: f32, surface_height: f32) -> f32 {
        let local = client_y - self.top;
        if self.height > 0.0 {
            local * surface_height / self.height
        } else {
            local
        }
    }

    /// Centre the left paddle on the pointer, clamped inside the surface.
    /// Pointers outside the surface just pin the paddle to an edge.
    pub fn apply_pointer(&self, state: &mut GameState, client_y: f32) {
        let height = state.height();
        let y = self.to_surface_y(client_y, height) - state.left.height / 2.0;
        state.left.move_to(y, height);
    }
}
