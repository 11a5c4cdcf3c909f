//! Tessellating drawing surface
//!
//! Implements [`DrawSurface`] by turning each call into coloured triangles.
//! The finished vertex list is handed to the GPU pipeline once per frame.

use glam::Vec2;

use super::shapes;
use super::surface::DrawSurface;
use super::vertex::{Rgba, Vertex, colors};

/// Circle tessellation quality
const CIRCLE_SEGMENTS: u32 = 24;

#[derive(Debug, Clone)]
pub struct VertexCanvas {
    vertices: Vec<Vertex>,
    fill: Rgba,
    stroke: Rgba,
    dash: Vec<f32>,
    /// Stroke width in pixels
    pub line_width: f32,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            fill: colors::WHITE,
            stroke: colors::WHITE,
            dash: Vec::new(),
            line_width: 1.0,
        }
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles drawn since the last clear
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Current dash pattern
    pub fn line_dash(&self) -> &[f32] {
        &self.dash
    }
}

impl DrawSurface for VertexCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        if pattern.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return;
        }
        self.dash = pattern.to_vec();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.vertices
            .extend(shapes::rect(x, y, width, height, self.fill));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.vertices
            .extend(shapes::circle(center, radius, self.fill, CIRCLE_SEGMENTS));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32) {
        self.vertices
            .extend(shapes::text(text, x, y, font_px, self.fill));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.vertices.extend(shapes::dashed_line(
            from,
            to,
            self.line_width,
            &self.dash,
            self.stroke,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_uses_current_color() {
        let mut canvas = VertexCanvas::new();
        canvas.set_fill_color(colors::NET);
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0);
        assert!(canvas.vertices().iter().all(|v| v.color == colors::NET));
    }

    #[test]
    fn test_clear_drops_vertices() {
        let mut canvas = VertexCanvas::new();
        canvas.fill_circle(Vec2::new(5.0, 5.0), 3.0);
        assert_eq!(canvas.vertices().len(), (CIRCLE_SEGMENTS * 3) as usize);
        canvas.clear();
        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_invalid_dash_is_ignored() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_dash(&[4.0, 2.0]);
        canvas.set_line_dash(&[4.0, -1.0]);
        assert_eq!(canvas.line_dash(), &[4.0, 2.0]);
        canvas.set_line_dash(&[]);
        assert!(canvas.line_dash().is_empty());
    }

    #[test]
    fn test_stroke_uses_stroke_color_and_dash() {
        let mut canvas = VertexCanvas::new();
        canvas.set_stroke_color(colors::NET);
        canvas.set_line_dash(&[10.0, 16.0]);
        canvas.stroke_line(Vec2::ZERO, Vec2::new(0.0, 100.0));
        assert_eq!(canvas.vertices().len(), 4 * 6);
        assert!(canvas.vertices().iter().all(|v| v.color == colors::NET));
    }

    #[test]
    fn test_microscopic_dash_strokes_solid() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_dash(&[1e-9, 1e-9]);
        canvas.stroke_line(Vec2::ZERO, Vec2::new(0.0, 500.0));
        assert_eq!(canvas.vertices().len(), 6);
    }
}
