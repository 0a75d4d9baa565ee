//! Canvas2D draw surface
//!
//! Thin wrapper over [`CanvasRenderingContext2d`] implementing
//! [`DrawSurface`]. Each primitive sets the fill style itself, so no state
//! leaks between calls.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::DrawSurface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wraps the 2d context of `canvas`. Panics when the context is
    /// unavailable.
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
