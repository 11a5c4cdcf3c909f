//! Drawing surface abstraction
//!
//! The small immediate-mode API the game draws through, shaped after a 2D
//! canvas context: stateful fill/stroke colours and dash pattern, pixel
//! coordinates with y pointing down.

use glam::Vec2;

use super::vertex::Rgba;

pub trait DrawSurface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Rgba);

    fn set_stroke_color(&mut self, color: Rgba);

    /// Alternating on/off lengths for strokes; empty means solid.
    /// Invalid patterns (negative or non-finite entries) are ignored.
    fn set_line_dash(&mut self, pattern: &[f32]);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Draw `text` with its baseline at `y` and left edge at `x`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}
