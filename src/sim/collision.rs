//! Scripted collision
//!
//! Not a physics step: one deterministic displacement of the blue disc away
//! from the red disc, applied only when the two are within range.

use glam::Vec2;

use super::state::{DiscId, FieldState};
use crate::polar_to_cartesian;

/// What a collision attempt did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionOutcome {
    /// Blue was knocked back
    Pushed { from: Vec2, to: Vec2 },
    /// Discs were too far apart; nothing moved
    TooFar { distance: f32 },
}

impl CollisionOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, CollisionOutcome::Pushed { .. })
    }
}

/// Knock-back of `target` away from `striker`
///
/// Returns the unclamped destination, or `None` if the discs are not closer
/// than `range`. Coincident discs push along +x since `atan2(0, 0) == 0`.
pub fn knock_back(striker: Vec2, target: Vec2, range: f32, push: f32) -> Option<Vec2> {
    let d = target - striker;
    if d.length() >= range {
        return None;
    }
    let angle = d.y.atan2(d.x);
    Some(target + polar_to_cartesian(push, angle))
}

/// Apply the scripted collision to the field
pub fn simulate_collision(field: &mut FieldState, range: f32, push: f32) -> CollisionOutcome {
    let red = field.red().pos;
    let from = field.blue().pos;
    match knock_back(red, from, range, push) {
        Some(dest) => {
            field.place(DiscId::Blue, dest);
            CollisionOutcome::Pushed {
                from,
                to: field.blue().pos,
            }
        }
        None => CollisionOutcome::TooFar {
            distance: red.distance(from),
        },
    }
}
