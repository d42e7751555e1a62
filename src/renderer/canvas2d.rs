//! `Painter` backed by a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::painter::Painter;
use crate::color::Rgba;
use crate::error::MotionError;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, MotionError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(MotionError::CanvasUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MotionError::CanvasUnavailable)?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
