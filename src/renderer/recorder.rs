//! Recording surface
//!
//! Captures draw calls instead of rasterizing them. `clear` starts a new
//! frame, so `ops()` always holds exactly what the last render produced.

use glam::Vec2;

use super::Surface;

/// One captured draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    StrokeRect {
        origin: Vec2,
        size: Vec2,
        color: String,
        width: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        fill: String,
        outline: String,
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
    },
    Text {
        text: String,
        center: Vec2,
        color: String,
        font: String,
    },
}

impl DrawOp {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::Clear => "clear",
            DrawOp::StrokeRect { .. } => "stroke_rect",
            DrawOp::StrokeCircle { .. } => "stroke_circle",
            DrawOp::FillCircle { .. } => "fill_circle",
            DrawOp::Line { .. } => "line",
            DrawOp::Text { .. } => "text",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    ops: Vec<DrawOp>,
    frames: usize,
}

impl DrawRecorder {
    /// Draw calls since the last clear
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of clears seen, i.e. full redraws
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Centers of all filled circles in the current frame
    pub fn disc_centers(&self) -> Vec<Vec2> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawRecorder {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        self.frames += 1;
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: &str, width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            origin,
            size,
            color: color.to_string(),
            width,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, width: f32) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            color: color.to_string(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, outline: &str, width: f32) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            fill: fill.to_string(),
            outline: outline.to_string(),
            width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }

    fn text(&mut self, text: &str, center: Vec2, color: &str, font: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center,
            color: color.to_string(),
            font: font.to_string(),
        });
    }
}
