//! Frame painting for the canvas demo
//!
//! The simulation never draws; it hands a `Ball` to `draw_frame`, which paints
//! through the `Surface` trait. The wasm32 build implements `Surface` over a
//! 2D canvas context; tests implement it with an op recorder.

use glam::Vec2;

use crate::consts::SHADOW_DROP;
use crate::sim::Ball;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// An RGBA color. Alpha is fractional to match CSS `rgba(...)` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS serialization, e.g. `rgba(102,126,234,0.06)`
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Page palette (lifted from the site's accent gradient)
pub mod palette {
    use super::Color;

    /// Backdrop gradient, top-left corner
    pub const BACKDROP_FROM: Color = Color::rgba(102, 126, 234, 0.06);
    /// Backdrop gradient, bottom-right corner
    pub const BACKDROP_TO: Color = Color::rgba(118, 75, 162, 0.06);
    /// Soft shadow under the ball
    pub const SHADOW: Color = Color::rgba(0, 0, 0, 0.12);
    /// Ball shading, specular highlight to rim
    pub const BALL_HIGHLIGHT: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BALL_BODY: Color = Color::rgb(0x66, 0x7e, 0xea);
    pub const BALL_RIM: Color = Color::rgb(0x76, 0x4b, 0xa2);
    /// Caption text
    pub const LABEL: Color = Color::rgb(0xe0, 0xe0, 0xe0);
}

/// Caption drawn in the bottom-left corner of the demo
pub const LABEL_TEXT: &str = "Bouncing Ball";
/// Font for the caption (canvas font shorthand)
pub const LABEL_FONT: &str = "14px Segoe UI, Tahoma, sans-serif";

/// Radial shading stops for the ball: offset in [0,1] from the highlight
/// center out to the rim.
pub const BALL_STOPS: [(f32, Color); 3] = [
    (0.0, palette::BALL_HIGHLIGHT),
    (0.4, palette::BALL_BODY),
    (1.0, palette::BALL_RIM),
];

/// The 2D drawing target the demo renders into.
///
/// Mirrors the handful of Canvas2D primitives the frame needs; nothing here
/// retains state between calls.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    /// Fill the whole surface with a linear gradient running from the
    /// top-left corner to the bottom-right corner.
    fn fill_backdrop(&mut self, from: Color, to: Color);
    /// Axis-aligned filled ellipse.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    /// Filled circle shaded by a radial gradient whose inner circle sits at
    /// `center + highlight_offset` with `highlight_radius`, and whose outer
    /// circle is the ball outline itself.
    fn fill_shaded_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        highlight_offset: Vec2,
        highlight_radius: f32,
        stops: &[(f32, Color)],
    );
    /// Draw `text` with its baseline at `pos`.
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Color);
}

/// Offset of the specular highlight from the ball center
const HIGHLIGHT_OFFSET: Vec2 = Vec2::new(-6.0, -6.0);
/// Inner radius of the highlight gradient
const HIGHLIGHT_RADIUS: f32 = 6.0;

/// Paint one frame: backdrop, shadow, ball, caption.
pub fn draw_frame(surface: &mut dyn Surface, ball: &Ball) {
    let h = surface.height();

    surface.clear();
    surface.fill_backdrop(palette::BACKDROP_FROM, palette::BACKDROP_TO);

    // Shadow sits just below the ball, squashed to an ellipse.
    surface.fill_ellipse(
        Vec2::new(ball.pos.x, ball.pos.y + ball.radius + SHADOW_DROP),
        Vec2::new(ball.radius * 0.9, ball.radius * 0.4),
        palette::SHADOW,
    );

    surface.fill_shaded_circle(
        ball.pos,
        ball.radius,
        HIGHLIGHT_OFFSET,
        HIGHLIGHT_RADIUS,
        &BALL_STOPS,
    );

    surface.fill_text(LABEL_TEXT, Vec2::new(12.0, h - 12.0), palette::LABEL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bounds;

    /// Records draw calls instead of painting them.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Backdrop(Color, Color),
        Ellipse(Vec2, Vec2, Color),
        ShadedCircle(Vec2, f32),
        Text(String, Vec2),
    }

    impl Surface for Recorder {
        fn width(&self) -> f32 {
            400.0
        }
        fn height(&self) -> f32 {
            300.0
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_backdrop(&mut self, from: Color, to: Color) {
            self.ops.push(Op::Backdrop(from, to));
        }
        fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
            self.ops.push(Op::Ellipse(center, radii, color));
        }
        fn fill_shaded_circle(
            &mut self,
            center: Vec2,
            radius: f32,
            _highlight_offset: Vec2,
            _highlight_radius: f32,
            _stops: &[(f32, Color)],
        ) {
            self.ops.push(Op::ShadedCircle(center, radius));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, _color: Color) {
            self.ops.push(Op::Text(text.to_string(), pos));
        }
    }

    #[test]
    fn test_frame_paint_order() {
        let ball = Ball::spawn(Bounds::new(400.0, 300.0));
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &ball);

        assert_eq!(rec.ops.len(), 5);
        assert_eq!(rec.ops[0], Op::Clear);
        assert!(matches!(rec.ops[1], Op::Backdrop(..)));
        assert!(matches!(rec.ops[2], Op::Ellipse(..)));
        assert!(matches!(rec.ops[3], Op::ShadedCircle(..)));
        assert!(matches!(rec.ops[4], Op::Text(..)));
    }

    #[test]
    fn test_shadow_geometry() {
        let ball = Ball::spawn(Bounds::new(400.0, 300.0));
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &ball);

        let Op::Ellipse(center, radii, color) = rec.ops[2].clone() else {
            panic!("expected shadow ellipse");
        };
        assert_eq!(center, Vec2::new(ball.pos.x, ball.pos.y + 18.0 + 6.0));
        assert_eq!(radii, Vec2::new(18.0 * 0.9, 18.0 * 0.4));
        assert_eq!(color, palette::SHADOW);
    }

    #[test]
    fn test_label_anchored_bottom_left() {
        let ball = Ball::spawn(Bounds::new(400.0, 300.0));
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &ball);

        let Op::Text(text, pos) = rec.ops[4].clone() else {
            panic!("expected caption");
        };
        assert_eq!(text, LABEL_TEXT);
        assert_eq!(pos, Vec2::new(12.0, 288.0));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(palette::SHADOW.css(), "rgba(0,0,0,0.12)");
        assert_eq!(palette::BALL_BODY.css(), "rgb(102,126,234)");
    }
}
