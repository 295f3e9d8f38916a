use std::{cell::RefCell, rc::Rc};

use web_sys::{Event, Performance};

use crate::{
    error::Error,
    field::ParticleField,
    options::BackdropOptions,
    particle::SurfaceSize,
    random,
    render::{FrameLoop, GlyphStyle},
    web::{
        animation::{AnimationHandle, Timeout},
        canvas::CanvasSurface,
        event_callback::{EventCallback, ORIENTATION_EVENT_TYPES, RESIZE_EVENT_TYPES},
        utils::{log_debug, log_warn, performance, viewport_metrics, window},
    },
};

/// Name of the `performance.measure` entry recorded for each frame.
pub const FRAME_MARK: &str = "math-backdrop-frame";

/// Everything a frame reads or writes.
#[derive(Debug)]
struct Scene {
    field: ParticleField<fastrand::Rng>,
    canvas: CanvasSurface,
    style: GlyphStyle,
}

impl Scene {
    /// Re-reads the viewport metrics and resizes the field and the canvas.
    fn resize(&mut self) -> Result<SurfaceSize, Error> {
        let size = viewport_metrics(&window()?)?.surface_size();
        self.field.resize(size);
        self.canvas.apply_size(size);
        Ok(size)
    }
}

/// The falling-equation backdrop, mounted on a page canvas.
///
/// Dropping it stops the animation and unregisters the window listeners.
/// Call [`MathBackdrop::run_forever`] to keep it alive for the rest of the
/// page session instead.
///
/// # Examples
///
/// ```no_run
/// use math_backdrop::{BackdropOptions, MathBackdrop};
///
/// let backdrop = MathBackdrop::mount(BackdropOptions::new().canvas_id("backdrop")).unwrap();
/// backdrop.run_forever();
/// ```
#[derive(Debug)]
pub struct MathBackdrop {
    /// Field, canvas and style, shared with the frame and resize callbacks.
    scene: Rc<RefCell<Scene>>,
    /// The running animation loop.
    animation: AnimationHandle,
    /// `resize` listener.
    _resize_listener: EventCallback<Event>,
    /// `orientationchange` listener.
    _orientation_listener: EventCallback<Event>,
}

impl MathBackdrop {
    /// Mounts the backdrop with the default options.
    pub fn new() -> Result<Self, Error> {
        Self::mount(BackdropOptions::default())
    }

    /// Mounts the backdrop on the canvas named in `options` and starts the
    /// animation.
    ///
    /// Fails if the window, the document, the canvas or its 2D context is
    /// unavailable. Nothing is scheduled in that case.
    pub fn mount(options: BackdropOptions) -> Result<Self, Error> {
        let window = window()?;
        let canvas = CanvasSurface::from_id(&options.canvas_id)?;
        let size = viewport_metrics(&window)?.surface_size();
        canvas.apply_size(size);

        let performance = if options.measure_performance {
            Some(performance(&window)?)
        } else {
            None
        };

        let scene = Rc::new(RefCell::new(Scene {
            field: ParticleField::new(size, random::rng(options.seed)),
            canvas,
            style: GlyphStyle::from(&options),
        }));

        let resize_listener = EventCallback::new(window.clone().into(), RESIZE_EVENT_TYPES, {
            let scene = scene.clone();
            move |_: Event| resize(&scene)
        })?;

        // Owned by the listener, so dropping the listener also cancels a
        // resize that is still waiting.
        let resize_later = Timeout::new({
            let scene = scene.clone();
            move || resize(&scene)
        });
        let delay_ms = options.orientation_delay_ms;
        let orientation_listener =
            EventCallback::new(window.into(), ORIENTATION_EVENT_TYPES, move |_: Event| {
                if let Err(e) = resize_later.arm(delay_ms) {
                    log_debug(&format!("math backdrop: orientation resize not scheduled: {e}"));
                }
            })?;

        let animation = AnimationHandle::start(Rc::new(RefCell::new(FrameLoop::new())), {
            let scene = scene.clone();
            let mut reported = false;
            move |frame_loop, _timestamp| {
                measure_begin(performance.as_ref());
                let result = {
                    let mut scene = scene.borrow_mut();
                    let Scene {
                        field,
                        canvas,
                        style,
                    } = &mut *scene;
                    frame_loop.step(field, canvas, style)
                };
                measure_end(performance.as_ref());

                match result {
                    Ok(rendered) => rendered,
                    Err(e) => {
                        if !reported {
                            log_warn(&format!("math backdrop: frame not fully drawn: {e}"));
                            reported = true;
                        }
                        true
                    }
                }
            }
        })?;

        Ok(Self {
            scene,
            animation,
            _resize_listener: resize_listener,
            _orientation_listener: orientation_listener,
        })
    }

    /// Returns the current drawing surface size.
    pub fn surface_size(&self) -> SurfaceSize {
        self.scene.borrow().field.surface()
    }

    /// Returns how many frames have been rendered.
    pub fn frames(&self) -> u64 {
        self.animation.frames()
    }

    /// Returns `true` while the animation is running.
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Resizes the surface to the current viewport and document dimensions.
    pub fn resize(&self) -> Result<SurfaceSize, Error> {
        self.scene.borrow_mut().resize()
    }

    /// Stops the animation. The last frame stays on the canvas.
    pub fn stop(&self) {
        self.animation.stop();
    }

    /// Keeps the animation and its listeners alive for the rest of the page
    /// session.
    pub fn run_forever(self) {
        std::mem::forget(self);
    }
}

impl Drop for MathBackdrop {
    fn drop(&mut self) {
        self.animation.stop();
    }
}

/// Resize callback body.
fn resize(scene: &RefCell<Scene>) {
    if let Err(e) = scene.borrow_mut().resize() {
        log_debug(&format!("math backdrop: resize skipped: {e}"));
    }
}

/// Marks the beginning of a frame.
fn measure_begin(performance: Option<&Performance>) {
    if let Some(performance) = performance {
        performance.mark(FRAME_MARK).unwrap_or_default();
    }
}

/// Records the frame duration since [`measure_begin`].
///
/// The entries are cleared right away so the timeline buffer does not grow
/// with every frame. Profilers still see them as they are recorded.
fn measure_end(performance: Option<&Performance>) {
    if let Some(performance) = performance {
        performance
            .measure_with_start_mark(FRAME_MARK, FRAME_MARK)
            .unwrap_or_default();
        performance.clear_marks_with_mark_name(FRAME_MARK);
        performance.clear_measures_with_measure_name(FRAME_MARK);
    }
}
