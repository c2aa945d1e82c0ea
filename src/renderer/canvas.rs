//! Canvas 2D surface (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface};
use crate::sim::Rect;
use crate::viewport::BackingStore;

/// `Surface` over a canvas element's 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store and restore the arena-to-pixel scale
    ///
    /// Setting the canvas size resets the context transform, so the scale is
    /// applied fresh each time instead of accumulating.
    pub fn apply_backing_store(&self, backing: BackingStore) {
        self.canvas.set_width(backing.width);
        self.canvas.set_height(backing.height);
        let scale = backing.scale as f64;
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn trace_polygon(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.min.x as f64,
            region.min.y as f64,
            region.width() as f64,
            region.height() as f64,
        );
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.trace_polygon(points);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.close_path();
        self.ctx.fill();
    }
}
