//! Field rendering module
//!
//! Draws over a `Surface`: the browser canvas on wasm, a recorder elsewhere.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use recorder::{DrawOp, DrawRecorder};

use glam::Vec2;

use crate::settings::FieldConfig;
use crate::sim::{Disc, DiscId};

/// Minimal 2D drawing surface
pub trait Surface {
    fn clear(&mut self);
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: &str, width: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, outline: &str, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);
    fn text(&mut self, text: &str, center: Vec2, color: &str, font: &str);
}

/// Colors and fonts for the field
pub mod palette {
    pub const BORDER: &str = "#d4af37";
    pub const BORDER_WIDTH: f32 = 3.0;
    pub const RED: &str = "#c41e3a";
    pub const BLUE: &str = "#3498db";
    pub const DISC_OUTLINE: &str = "#2c3e50";
    pub const DISC_OUTLINE_WIDTH: f32 = 2.0;
    pub const LABEL: &str = "white";
    pub const LABEL_FONT: &str = "bold 12px Arial";
}

pub fn disc_color(id: DiscId) -> &'static str {
    match id {
        DiscId::Red => palette::RED,
        DiscId::Blue => palette::BLUE,
    }
}

/// Redraw the whole field: border, center circle, midline, then discs
pub fn render_field<S: Surface + ?Sized>(surface: &mut S, config: &FieldConfig, discs: &[Disc]) {
    use palette::*;

    surface.clear();

    let origin = Vec2::splat(config.field_origin);
    let size = Vec2::splat(config.field_size);
    surface.stroke_rect(origin, size, BORDER, BORDER_WIDTH);

    let center = config.field_center();
    surface.stroke_circle(center, crate::consts::CENTER_CIRCLE_RADIUS, BORDER, BORDER_WIDTH);

    let top = Vec2::new(center.x, config.field_origin);
    let bottom = Vec2::new(center.x, config.field_origin + config.field_size);
    surface.line(top, bottom, BORDER, BORDER_WIDTH);

    for disc in discs {
        surface.fill_circle(
            disc.pos,
            disc.radius,
            disc_color(disc.id),
            DISC_OUTLINE,
            DISC_OUTLINE_WIDTH,
        );
        surface.text(disc.id.label(), disc.pos, LABEL, LABEL_FONT);
    }
}
