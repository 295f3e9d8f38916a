use crate::{
    error::Error,
    field::ParticleField,
    options::BackdropOptions,
    particle::Particle,
    random::RandomSource,
    surface::DrawingSurface,
};

/// Fill color and font family shared by every equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphStyle {
    /// CSS color of the text.
    pub color: String,
    /// CSS font family list.
    pub font_family: String,
}

impl GlyphStyle {
    /// Returns the CSS font shorthand for a glyph of `size` pixels.
    pub fn font(&self, size: f64) -> String {
        format!("{size}px {}", self.font_family)
    }
}

impl From<&BackdropOptions> for GlyphStyle {
    fn from(options: &BackdropOptions) -> Self {
        Self {
            color: options.accent_color.clone(),
            font_family: options.font_family.clone(),
        }
    }
}

/// Draws a single particle.
///
/// Alpha, color and font only live between the save/restore pair, so the
/// next particle starts from a clean state.
fn draw_particle<S: DrawingSurface>(
    surface: &mut S,
    particle: &Particle,
    style: &GlyphStyle,
) -> Result<(), Error> {
    let (x, y) = particle.position();
    surface.save();
    surface.set_global_alpha(particle.opacity());
    surface.set_fill_color(&style.color);
    surface.set_font(&style.font(particle.glyph_size()));
    let result = surface.fill_text(particle.label(), x, y);
    surface.restore();
    result
}

/// Renders one frame: clears the surface, then advances and draws each
/// particle in creation order.
///
/// Every particle is advanced even if drawing one of them fails; the first
/// draw error is returned after the frame completes.
pub fn render_frame<R, S>(
    field: &mut ParticleField<R>,
    surface: &mut S,
    style: &GlyphStyle,
) -> Result<(), Error>
where
    R: RandomSource,
    S: DrawingSurface,
{
    surface.clear(field.surface());
    let mut result = Ok(());
    field.update(|particle| {
        if let Err(e) = draw_particle(surface, particle, style) {
            if result.is_ok() {
                result = Err(e);
            }
        }
    });
    result
}

/// State of a [`FrameLoop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    /// No frames are rendered.
    #[default]
    Idle,
    /// A frame is rendered on every step.
    Running,
}

/// Start/stop state machine around [`render_frame`].
///
/// The browser drives it from `requestAnimationFrame`; tests drive it by
/// calling [`FrameLoop::step`] a fixed number of times.
#[derive(Debug, Default)]
pub struct FrameLoop {
    /// Current state.
    state: LoopState,
    /// Frames rendered since construction.
    frames: u64,
}

impl FrameLoop {
    /// Constructs a new, idle [`FrameLoop`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns `true` while the loop is running.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Returns how many frames have been rendered.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Moves the loop to [`LoopState::Running`].
    ///
    /// Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        let changed = self.state == LoopState::Idle;
        self.state = LoopState::Running;
        changed
    }

    /// Moves the loop to [`LoopState::Idle`].
    ///
    /// Returns `false` if it was already idle.
    pub fn stop(&mut self) -> bool {
        let changed = self.state == LoopState::Running;
        self.state = LoopState::Idle;
        changed
    }

    /// Renders one frame if the loop is running.
    ///
    /// Returns `Ok(true)` if a frame was rendered.
    pub fn step<R, S>(
        &mut self,
        field: &mut ParticleField<R>,
        surface: &mut S,
        style: &GlyphStyle,
    ) -> Result<bool, Error>
    where
        R: RandomSource,
        S: DrawingSurface,
    {
        if !self.is_running() {
            return Ok(false);
        }
        self.frames += 1;
        render_frame(field, surface, style)?;
        Ok(true)
    }
}
