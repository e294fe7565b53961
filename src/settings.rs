//! Field configuration
//!
//! Defaults come from `consts`. The host page may override any field through
//! a JSON `data-config` attribute on the canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::PageError;
use crate::consts::*;

/// How a press captures discs whose hit circles overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// At most one disc per press: the topmost hit
    #[default]
    Single,
    /// Every disc under the press point is captured and moves together
    MultiCapture,
}

impl DragPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragPolicy::Single => "single",
            DragPolicy::MultiCapture => "multi_capture",
        }
    }
}

/// Field geometry, collision tuning and notice timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Top-left corner of the field border
    pub field_origin: f32,
    /// Side length of the field border
    pub field_size: f32,
    pub disc_radius: f32,
    pub red_start: Vec2,
    pub blue_start: Vec2,
    pub collision_range: f32,
    pub push_distance: f32,
    pub notice_display_ms: f64,
    pub notice_fade_ms: f64,
    pub drag_policy: DragPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_origin: FIELD_ORIGIN,
            field_size: FIELD_SIZE,
            disc_radius: DISC_RADIUS,
            red_start: Vec2::from(RED_START),
            blue_start: Vec2::from(BLUE_START),
            collision_range: COLLISION_RANGE,
            push_distance: PUSH_DISTANCE,
            notice_display_ms: NOTICE_DISPLAY_MS,
            notice_fade_ms: NOTICE_FADE_MS,
            drag_policy: DragPolicy::Single,
        }
    }
}

impl FieldConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that leave no valid region for disc centers
    pub fn validate(&self) -> Result<(), PageError> {
        let invalid = |msg: String| Err(PageError::ConfigValue(msg));
        let finite = [
            self.field_origin,
            self.field_size,
            self.disc_radius,
            self.red_start.x,
            self.red_start.y,
            self.blue_start.x,
            self.blue_start.y,
            self.collision_range,
            self.push_distance,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.notice_display_ms.is_finite()
            && self.notice_fade_ms.is_finite();
        if !finite {
            return invalid("values must be finite".into());
        }
        if self.disc_radius <= 0.0 {
            return invalid(format!("disc_radius must be positive, got {}", self.disc_radius));
        }
        if self.field_size <= 2.0 * self.disc_radius {
            return invalid(format!(
                "field_size {} must exceed twice disc_radius {}",
                self.field_size, self.disc_radius
            ));
        }
        for (name, value) in [
            ("collision_range", self.collision_range as f64),
            ("push_distance", self.push_distance as f64),
            ("notice_display_ms", self.notice_display_ms),
            ("notice_fade_ms", self.notice_fade_ms),
        ] {
            if value < 0.0 {
                return invalid(format!("{} must not be negative, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Smallest coordinate a disc center may take
    pub fn min_coord(&self) -> f32 {
        self.field_origin + self.disc_radius
    }

    /// Largest coordinate a disc center may take
    pub fn max_coord(&self) -> f32 {
        self.field_origin + self.field_size - self.disc_radius
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::splat(self.field_origin + self.field_size / 2.0)
    }

    /// Total time a notice stays in the document
    pub fn notice_lifetime_ms(&self) -> f64 {
        self.notice_display_ms + self.notice_fade_ms
    }

    /// Load from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, crate::PageError> {
        match canvas.get_attribute("data-config") {
            Some(json) => {
                let config = Self::from_json(&json)?;
                log::info!("Loaded field config from data-config");
                Ok(config)
            }
            None => {
                log::info!("Using default field config");
                Ok(Self::default())
            }
        }
    }
}
