use web_sys::{wasm_bindgen::JsCast, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    error::Error,
    particle::SurfaceSize,
    surface::DrawingSurface,
    web::utils::{canvas_by_id, document, window},
};

/// Canvas drawing surface.
///
/// Wraps an existing `<canvas>` element of the page and its 2D context.
#[derive(Debug)]
pub struct CanvasSurface {
    /// Canvas element.
    inner: HtmlCanvasElement,
    /// Rendering context.
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Constructs a new [`CanvasSurface`] from the canvas with the given id.
    pub fn from_id(id: &str) -> Result<Self, Error> {
        let window = window()?;
        let canvas = canvas_by_id(&document(&window)?, id)?;
        Self::new(canvas)
    }

    /// Constructs a new [`CanvasSurface`] from a canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let context = canvas
            .get_context("2d")?
            .ok_or(Error::UnableToRetrieveCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::UnableToRetrieveCanvasContext)?;
        Ok(Self {
            inner: canvas,
            context,
        })
    }

    /// Returns the current size of the canvas backing store.
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.inner.width(), self.inner.height())
    }

    /// Resizes the canvas backing store.
    ///
    /// Setting the size wipes the canvas; the next frame repaints it.
    pub fn apply_size(&self, size: SurfaceSize) {
        if self.size() != size {
            self.inner.set_width(size.width);
            self.inner.set_height(size.height);
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.context
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.context.fill_text(text, x, y)?;
        Ok(())
    }
}
