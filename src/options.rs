/// Id of the canvas element the backdrop paints on by default.
pub const DEFAULT_CANVAS_ID: &str = "mathBackground";

/// Options for the [`MathBackdrop`](crate::MathBackdrop).
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropOptions {
    /// The canvas element id.
    pub(crate) canvas_id: String,
    /// CSS color used to fill every equation.
    pub(crate) accent_color: String,
    /// CSS font family list appended to the per-particle font size.
    pub(crate) font_family: String,
    /// Delay between an `orientationchange` event and the resize, in milliseconds.
    ///
    /// Browsers report the old dimensions for a short while after the
    /// device rotates.
    pub(crate) orientation_delay_ms: i32,
    /// Measure frame times using the `performance` API.
    pub(crate) measure_performance: bool,
    /// Seed for the random source. `None` seeds from the host's entropy.
    pub(crate) seed: Option<u64>,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            accent_color: "#00ff88".to_string(),
            font_family: "'IBM Plex Mono', monospace".to_string(),
            orientation_delay_ms: 100,
            measure_performance: false,
            seed: None,
        }
    }
}

impl BackdropOptions {
    /// Constructs a new [`BackdropOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the id of the canvas element to paint on.
    pub fn canvas_id(mut self, id: &str) -> Self {
        self.canvas_id = id.to_string();
        self
    }

    /// Sets the fill color of the equations.
    ///
    /// Any CSS color works, e.g. `#00ff88`, `rgb(0, 255, 136)` or `lime`.
    pub fn accent_color(mut self, color: &str) -> Self {
        self.accent_color = color.to_string();
        self
    }

    /// Sets the font family list, e.g. `"'Fira Code', monospace"`.
    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Sets the delay applied after an orientation change before resizing.
    ///
    /// # Panics
    ///
    /// Panics if `delay_ms` is negative.
    pub fn orientation_delay_ms(mut self, delay_ms: i32) -> Self {
        if delay_ms < 0 {
            panic!("Orientation delay must not be negative");
        }
        self.orientation_delay_ms = delay_ms;
        self
    }

    /// Enables frame-based measurements using the
    /// [Performance](https://developer.mozilla.org/en-US/docs/Web/API/Performance) API.
    ///
    /// Each frame shows up as a `math-backdrop-frame` measure in the
    /// browser's performance timeline.
    pub fn measure_performance(mut self, measure: bool) -> Self {
        self.measure_performance = measure;
        self
    }

    /// Seeds the random source, making the animation reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let options = BackdropOptions::new();
        assert_eq!(options.canvas_id, "mathBackground");
        assert_eq!(options.accent_color, "#00ff88");
        assert_eq!(options.font_family, "'IBM Plex Mono', monospace");
        assert_eq!(options.orientation_delay_ms, 100);
        assert!(!options.measure_performance);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_builder() {
        let options = BackdropOptions::new()
            .canvas_id("backdrop")
            .accent_color("lime")
            .font_family("monospace")
            .orientation_delay_ms(250)
            .measure_performance(true)
            .seed(42);

        assert_eq!(options.canvas_id, "backdrop");
        assert_eq!(options.accent_color, "lime");
        assert_eq!(options.font_family, "monospace");
        assert_eq!(options.orientation_delay_ms, 250);
        assert!(options.measure_performance);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    #[should_panic(expected = "Orientation delay must not be negative")]
    fn test_negative_orientation_delay_panics() {
        let _ = BackdropOptions::new().orientation_delay_ms(-1);
    }
}
