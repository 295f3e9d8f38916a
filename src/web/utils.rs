use web_sys::{
    console,
    wasm_bindgen::{JsCast, JsValue},
    Document, HtmlCanvasElement, Performance, Window,
};

use crate::{error::Error, surface::ViewportMetrics};

/// Returns the global `window`.
pub(crate) fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the `document` of `window`.
pub(crate) fn document(window: &Window) -> Result<Document, Error> {
    window.document().ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the `performance` object of `window`.
pub(crate) fn performance(window: &Window) -> Result<Performance, Error> {
    window.performance().ok_or(Error::UnableToRetrievePerformance)
}

/// Looks up the `<canvas>` element with the given id.
///
/// An element that exists but is not a canvas counts as missing.
pub(crate) fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, Error> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| Error::CanvasNotFound(id.to_string()))
}

/// Reads the current viewport and document dimensions.
pub(crate) fn viewport_metrics(window: &Window) -> Result<ViewportMetrics, Error> {
    let body = document(window)?.body().ok_or(Error::UnableToRetrieveBody)?;
    Ok(ViewportMetrics {
        viewport_width: window.inner_width()?.as_f64().unwrap_or_default(),
        viewport_height: window.inner_height()?.as_f64().unwrap_or_default(),
        document_height: body.scroll_height() as f64,
    })
}

/// Logs a debug message to the browser console.
pub(crate) fn log_debug(message: &str) {
    console::debug_1(&JsValue::from_str(message));
}

/// Logs a warning to the browser console.
pub(crate) fn log_warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}
