// Minimal 2-D drawing capability the simulation renders onto, plus the
// canvas-backed implementation used in the browser

use crate::color::Color;
use crate::error::LoadError;
use crate::point::{Point2D, Viewport};
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Shadow glow applied to subsequent fills until switched off again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Color,
}

pub trait Surface {
    fn size(&self) -> Viewport;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn fill_circle(&mut self, center: &Point2D, radius: f64, color: Color);
    fn stroke_line(&mut self, from: &Point2D, to: &Point2D, color: Color, width: f64);
    fn set_glow(&mut self, glow: Option<Glow>);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, LoadError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| LoadError::Unavailable("2d context"))?
            .ok_or(LoadError::Unavailable("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| LoadError::Unavailable("2d context"))?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn resize(&self, viewport: &Viewport) {
        resize_canvas(&self.canvas, viewport);
    }
}

// Only touches the backing store when the size actually changed, since
// assigning width/height wipes the canvas
pub fn resize_canvas(canvas: &HtmlCanvasElement, viewport: &Viewport) {
    let width = viewport.width as u32;
    let height = viewport.height as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill_rect(x, y, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: &Point2D, radius: f64, color: Color) {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        let _ = self.context.arc(center.x, center.y, radius, 0.0, PI * 2.0);
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: &Point2D, to: &Point2D, color: Color, width: f64) {
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        match glow {
            Some(glow) => {
                self.context.set_shadow_blur(glow.blur);
                self.context.set_shadow_color(&glow.color.to_css());
            }
            None => self.context.set_shadow_blur(0.0),
        }
    }
}
