//! Field simulation module
//!
//! Disc state and the scripted collision. Pure and deterministic:
//! - No rendering or platform dependencies
//! - Every mutation keeps discs inside the field

pub mod collision;
pub mod state;

pub use collision::{CollisionOutcome, knock_back, simulate_collision};
pub use state::{Disc, DiscId, FieldState};
