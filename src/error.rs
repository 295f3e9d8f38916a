use web_sys::wasm_bindgen::JsValue;

/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to retrieve the global `window`.
    #[error("unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve the `document` of the window.
    #[error("unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve the `<body>` of the document.
    #[error("unable to retrieve document body")]
    UnableToRetrieveBody,

    /// No `<canvas>` element with the given id exists on the page.
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),

    /// The canvas refused to hand out a 2D rendering context.
    #[error("unable to retrieve canvas 2d context")]
    UnableToRetrieveCanvasContext,

    /// The `performance` API is not available.
    #[error("unable to retrieve performance")]
    UnableToRetrievePerformance,

    /// An exception thrown by a browser API.
    #[error("javascript error: {0}")]
    JsError(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::JsError(message)
    }
}
