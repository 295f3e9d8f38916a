#![warn(missing_docs, clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

use web_sys::wasm_bindgen::prelude::*;

/// The equation catalog.
pub mod catalog;

/// Custom error type.
pub mod error;

/// Fixed particle pool.
pub mod field;

/// Backdrop configuration.
pub mod options;

/// Particle model and recycling.
pub mod particle;

/// Injectable random source.
pub mod random;

/// Frame rendering and the frame loop state machine.
pub mod render;

/// Drawing surface and viewport metrics.
pub mod surface;

/// Browser binding.
pub mod web;

/// Backdrop mounting.
mod backdrop;

// Re-export web_sys crate.
pub use web_sys;

pub use backdrop::{MathBackdrop, FRAME_MARK};
pub use options::BackdropOptions;

/// Mounts the backdrop on page load.
///
/// A page without the canvas simply has no backdrop: the failure is logged
/// to the console at debug level and never reaches the page's other scripts.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match MathBackdrop::new() {
        Ok(backdrop) => backdrop.run_forever(),
        Err(e) => web::utils::log_debug(&format!("math backdrop disabled: {e}")),
    }
}
