//! ## Browser binding
//!
//! Everything that touches `web-sys` lives here. The core modules only see
//! the [`DrawingSurface`](crate::surface::DrawingSurface) trait and plain
//! [`ViewportMetrics`](crate::surface::ViewportMetrics), so they run and test
//! natively.
//!
//! - [`canvas`]: the `<canvas>` element and its 2D context.
//! - [`animation`]: the `requestAnimationFrame` loop with a stop handle.
//! - `event_callback`: window listeners that unregister on drop.
//! - `utils`: window, document and metric lookups, console logging.

/// Animation frame scheduling.
pub mod animation;

/// Canvas drawing surface.
pub mod canvas;

/// Event callback management.
pub(crate) mod event_callback;

/// Web utility functions.
pub(crate) mod utils;
