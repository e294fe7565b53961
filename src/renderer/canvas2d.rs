//! Canvas 2D surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::Surface;
use crate::PageError;

const TAU: f64 = std::f64::consts::PI * 2.0;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    /// Look up `#id`, fix its drawing surface to `size`×`size`, and grab the
    /// 2D context
    pub fn from_document(document: &Document, id: &str, size: u32) -> Result<Self, PageError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PageError::WrongElement {
                id: id.to_string(),
                expected: "canvas",
            })?;
        canvas.set_width(size);
        canvas.set_height(size);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(PageError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::NoContext)?;

        log::info!("Canvas #{} ready ({}x{})", id, size, size);
        Ok(Self { ctx, canvas })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: &str, width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx
            .stroke_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, width: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, outline: &str, width: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(outline);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, center: Vec2, color: &str, font: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(text, center.x as f64, center.y as f64)
            .ok();
    }
}
