//! Canvas2D implementation of `Surface` (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, LABEL_FONT, Surface};

/// A `Surface` backed by a `<canvas>` 2D context.
///
/// Construction fails quietly (returns `None`) when the element is not a
/// canvas or the 2D context is unavailable; an absent demo is not an error.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_backdrop(&mut self, from: Color, to: Color) {
        let grad =
            self.ctx
                .create_linear_gradient(0.0, 0.0, self.width as f64, self.height as f64);
        let _ = grad.add_color_stop(0.0, &from.css());
        let _ = grad.add_color_stop(1.0, &to.css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn fill_shaded_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        highlight_offset: Vec2,
        highlight_radius: f32,
        stops: &[(f32, Color)],
    ) {
        let highlight = center + highlight_offset;
        self.ctx.begin_path();
        if let Ok(grad) = self.ctx.create_radial_gradient(
            highlight.x as f64,
            highlight.y as f64,
            highlight_radius as f64,
            center.x as f64,
            center.y as f64,
            radius as f64,
        ) {
            for (offset, color) in stops {
                let _ = grad.add_color_stop(*offset, &color.css());
            }
            self.ctx.set_fill_style_canvas_gradient(&grad);
        }
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(&color.css());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
