//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in surface pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Rgba, Vertex};

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgba) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a straight stroke of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: Rgba) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Upper bound on dash cycles per stroke; denser patterns render solid
const MAX_DASH_CYCLES: f32 = 4096.0;

/// Generate vertices for a stroke broken up by a dash pattern.
///
/// `dash` alternates on/off lengths starting with "on"; an odd-length pattern
/// is repeated once to make it even. An empty or all-zero pattern is solid, as
/// is one so fine that the stroke would need more than [`MAX_DASH_CYCLES`].
pub fn dashed_line(from: Vec2, to: Vec2, width: f32, dash: &[f32], color: Rgba) -> Vec<Vertex> {
    let pattern: Vec<f32> = if dash.len() % 2 == 1 {
        dash.iter().chain(dash.iter()).copied().collect()
    } else {
        dash.to_vec()
    };
    let period: f32 = pattern.iter().sum();
    let length = from.distance(to);

    let cycles = (length / period).ceil();
    let too_dense = !cycles.is_finite() || cycles > MAX_DASH_CYCLES;
    if pattern.is_empty() || period <= 0.0 || !period.is_finite() || too_dense {
        return line(from, to, width, color);
    }

    let dir = (to - from).normalize_or_zero();
    let mut vertices = Vec::new();

    // Each cycle starts from its own multiple of the period, so progress
    // never depends on accumulating tiny segment lengths.
    for cycle in 0..cycles as u32 {
        let mut offset = cycle as f32 * period;
        for (index, &seg) in pattern.iter().enumerate() {
            if offset >= length {
                break;
            }
            let end = (offset + seg).min(length);
            if index % 2 == 0 && end > offset {
                vertices.extend(line(from + dir * offset, from + dir * end, width, color));
            }
            offset = end;
        }
    }

    vertices
}

/// Seven-segment layout, bits a..g = 0..6:
///
/// ```text
///  aaa
/// f   b
///  ggg
/// e   c
///  ddd
/// ```
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Glyph metrics as fractions of the font size
const GLYPH_WIDTH: f32 = 0.5;
const GLYPH_HEIGHT: f32 = 0.72;
const GLYPH_ADVANCE: f32 = 0.6;
const GLYPH_STROKE: f32 = 0.1;

fn segment_mask(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(DIGIT_SEGMENTS[c as usize - '0' as usize]),
        '-' => Some(0b100_0000),
        _ => None,
    }
}

/// Generate vertices for text as seven-segment glyphs.
///
/// Digits and `-` are drawn; any other character only advances the pen.
/// `baseline` is the y of the glyph bottoms.
pub fn text(s: &str, x: f32, baseline: f32, font_px: f32, color: Rgba) -> Vec<Vertex> {
    let w = GLYPH_WIDTH * font_px;
    let h = GLYPH_HEIGHT * font_px;
    let t = GLYPH_STROKE * font_px;
    let top = baseline - h;
    let half = h / 2.0;

    let mut vertices = Vec::new();
    let mut pen = x;

    for c in s.chars() {
        if let Some(mask) = segment_mask(c) {
            let segments = [
                (pen, top, w, t),                    // a
                (pen + w - t, top, t, half),         // b
                (pen + w - t, top + half, t, half),  // c
                (pen, top + h - t, w, t),            // d
                (pen, top + half, t, half),          // e
                (pen, top, t, half),                 // f
                (pen, top + half - t / 2.0, w, t),   // g
            ];
            for (bit, &(sx, sy, sw, sh)) in segments.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    vertices.extend(rect(sx, sy, sw, sh, color));
                }
            }
        }
        pen += GLYPH_ADVANCE * font_px;
    }

    vertices
}
