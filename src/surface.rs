use crate::{error::Error, particle::SurfaceSize};

/// A 2D drawing context the backdrop can paint on.
///
/// This is the subset of the canvas 2D API the renderer needs. Any transient
/// state set between [`DrawingSurface::save`] and [`DrawingSurface::restore`]
/// must not leak into later draws.
pub trait DrawingSurface {
    /// Clears the rectangle `(0, 0, size.width, size.height)`.
    fn clear(&mut self, size: SurfaceSize);

    /// Pushes the current drawing state.
    fn save(&mut self);

    /// Pops the drawing state pushed by the last [`DrawingSurface::save`].
    fn restore(&mut self);

    /// Sets the transparency applied to subsequent draws.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Sets the fill color as a CSS color string.
    fn set_fill_color(&mut self, color: &str);

    /// Sets the font as a CSS font shorthand.
    fn set_font(&mut self, font: &str);

    /// Fills `text` with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error>;
}

/// Viewport and document dimensions reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportMetrics {
    /// Width of the viewport (`window.innerWidth`).
    pub viewport_width: f64,
    /// Height of the viewport (`window.innerHeight`).
    pub viewport_height: f64,
    /// Full scrollable height of the page (`document.body.scrollHeight`).
    pub document_height: f64,
}

impl ViewportMetrics {
    /// Computes the drawing surface size for these metrics.
    ///
    /// The surface spans the viewport horizontally and the whole document
    /// vertically, so equations keep falling behind content that is scrolled
    /// into view. The viewport height does not take part.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            to_pixels(self.viewport_width),
            to_pixels(self.document_height),
        )
    }
}

/// Truncates a host dimension to whole pixels.
///
/// Float-to-int `as` saturates, so negative and NaN values become 0.
fn to_pixels(value: f64) -> u32 {
    value as u32
}
