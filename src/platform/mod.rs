//! Platform layer
//!
//! Browser specifics live here:
//! - Mouse/touch input to field coordinates
//! - Page controls, rules panel, section scrolling, navbar styling
//! - DOM notification overlays (wasm only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod notifier;
pub mod page;

pub use input::{PressEvent, PressPhase, dispatch, to_field};
pub use page::PageAction;
