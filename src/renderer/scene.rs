//! Frame composition
//!
//! A read-only projection of the game state onto a [`DrawSurface`].

use glam::Vec2;

use super::surface::DrawSurface;
use super::vertex::colors;
use crate::consts::*;
use crate::sim::GameState;

/// Paint one frame: clear, net, paddles, ball, scores
pub fn draw_frame<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear();
    draw_net(state, surface);

    surface.set_fill_color(colors::WHITE);
    for paddle in [&state.left, &state.right] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height);
    }

    let ball = &state.ball;
    surface.fill_rect(ball.pos.x, ball.pos.y, ball.size, ball.size);

    draw_scores(state, surface);
}

fn draw_net<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let x = state.width() / 2.0;
    surface.set_stroke_color(colors::NET);
    surface.set_line_dash(&NET_DASH);
    surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, state.height()));
    surface.set_line_dash(&[]);
}

fn draw_scores<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let center = state.width() / 2.0;
    surface.set_fill_color(colors::WHITE);
    surface.fill_text(
        &state.score.left.to_string(),
        center + LEFT_SCORE_OFFSET,
        SCORE_Y,
        SCORE_FONT_PX,
    );
    surface.fill_text(
        &state.score.right.to_string(),
        center + RIGHT_SCORE_OFFSET,
        SCORE_Y,
        SCORE_FONT_PX,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexCanvas;
    use crate::renderer::vertex::Rgba;

    /// Records calls instead of drawing
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Fill(Rgba),
        Stroke(Rgba),
        Dash(Vec<f32>),
        Rect(f32, f32, f32, f32),
        Circle(Vec2, f32),
        Text(String, f32, f32, f32),
        Line(Vec2, Vec2),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn set_fill_color(&mut self, color: Rgba) {
            self.calls.push(Call::Fill(color));
        }
        fn set_stroke_color(&mut self, color: Rgba) {
            self.calls.push(Call::Stroke(color));
        }
        fn set_line_dash(&mut self, pattern: &[f32]) {
            self.calls.push(Call::Dash(pattern.to_vec()));
        }
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
            self.calls.push(Call::Rect(x, y, width, height));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32) {
            self.calls.push(Call::Text(text.to_string(), x, y, font_px));
        }
        fn stroke_line(&mut self, from: Vec2, to: Vec2) {
            self.calls.push(Call::Line(from, to));
        }
    }

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(800.0, 500.0, 5);
        state.score.left = 3;
        state.score.right = 11;
        let mut rec = Recorder::default();

        draw_frame(&state, &mut rec);

        let b = state.ball;
        let expected = vec![
            Call::Clear,
            Call::Stroke(colors::NET),
            Call::Dash(vec![10.0, 16.0]),
            Call::Line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 500.0)),
            Call::Dash(vec![]),
            Call::Fill(colors::WHITE),
            Call::Rect(18.0, 210.0, 12.0, 80.0),
            Call::Rect(770.0, 210.0, 12.0, 80.0),
            Call::Rect(b.pos.x, b.pos.y, 14.0, 14.0),
            Call::Fill(colors::WHITE),
            Call::Text("3".into(), 336.0, 48.0, 32.0),
            Call::Text("11".into(), 432.0, 48.0, 32.0),
        ];
        assert_eq!(rec.calls, expected);
    }

    #[test]
    fn test_vertex_canvas_frame_is_replaced_each_draw() {
        let state = GameState::new(800.0, 500.0, 5);
        let mut canvas = VertexCanvas::new();
        draw_frame(&state, &mut canvas);
        let first = canvas.vertices().len();
        assert!(first > 0);
        draw_frame(&state, &mut canvas);
        assert_eq!(canvas.vertices().len(), first);
        // Net dash pattern is reset after drawing
        assert!(canvas.line_dash().is_empty());
    }
}
