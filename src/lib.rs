//! Disc Field - two draggable discs on a bordered canvas field
//!
//! Core modules:
//! - `sim`: Disc state, drag handling, scripted collision
//! - `renderer`: Field drawing over a 2D surface
//! - `platform`: Browser input, page wiring, DOM notifications
//! - `ui`: Transient notification lifecycle
//! - `controller`: Ties state, rendering and notifications together

pub mod controller;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use controller::Interaction;
pub use error::PageError;
pub use settings::{DragPolicy, FieldConfig};

use glam::Vec2;

/// Field configuration constants
pub mod consts {
    /// Canvas drawing surface (square)
    pub const CANVAS_SIZE: f32 = 400.0;

    /// Field border: top-left corner and side length
    pub const FIELD_ORIGIN: f32 = 50.0;
    pub const FIELD_SIZE: f32 = 300.0;
    /// Center circle radius
    pub const CENTER_CIRCLE_RADIUS: f32 = 30.0;

    /// Disc defaults
    pub const DISC_RADIUS: f32 = 15.0;
    pub const RED_START: (f32, f32) = (100.0, 100.0);
    pub const BLUE_START: (f32, f32) = (300.0, 300.0);

    /// Scripted collision: discs closer than this collide
    pub const COLLISION_RANGE: f32 = 100.0;
    /// Distance the blue disc is knocked back
    pub const PUSH_DISTANCE: f32 = 50.0;

    /// Notification timing (ms)
    pub const NOTICE_DISPLAY_MS: f64 = 3000.0;
    pub const NOTICE_FADE_MS: f64 = 300.0;

    /// Navbar height subtracted when scrolling to a section
    pub const NAVBAR_OFFSET: f64 = 70.0;
    /// Scroll depth past which the navbar turns opaque
    pub const NAVBAR_SOLID_AFTER: f64 = 100.0;
}

/// Clamp a point into the square `[min, max]²`
#[inline]
pub fn clamp_square(pos: Vec2, min: f32, max: f32) -> Vec2 {
    pos.clamp(Vec2::splat(min), Vec2::splat(max))
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
