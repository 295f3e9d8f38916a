use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use web_sys::wasm_bindgen::{prelude::Closure, JsCast};

use crate::{
    error::Error,
    render::FrameLoop,
    web::utils::{log_warn, window},
};

/// Frame callback shared between the scheduler and itself.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Requests an animation frame.
///
/// Returns the request id, which can be passed to `cancelAnimationFrame`.
pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, Error> {
    Ok(window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Calls `f` once after `delay_ms` milliseconds.
pub fn set_timeout(f: &Closure<dyn FnMut()>, delay_ms: i32) -> Result<i32, Error> {
    Ok(window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            f.as_ref().unchecked_ref(),
            delay_ms,
        )?)
}

/// A one-shot timer that can be re-armed.
///
/// Arming it again before it fires replaces the pending call. Dropping it
/// cancels the pending call, so the callback never runs after the closure
/// is gone.
#[derive(Debug)]
pub struct Timeout {
    /// Id of the pending `setTimeout` call.
    pending: Rc<Cell<Option<i32>>>,
    /// The timer callback.
    callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Constructs a new, unarmed [`Timeout`] that calls `f` when it fires.
    pub fn new<F>(mut f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let callback = Closure::<dyn FnMut()>::new({
            let pending = pending.clone();
            move || {
                pending.set(None);
                f();
            }
        });
        Self { pending, callback }
    }

    /// Calls the callback once after `delay_ms` milliseconds.
    pub fn arm(&self, delay_ms: i32) -> Result<(), Error> {
        self.cancel();
        self.pending.set(Some(set_timeout(&self.callback, delay_ms)?));
        Ok(())
    }

    /// Returns `true` while a call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Cancels the scheduled call, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Records the outcome of a frame request.
///
/// The loop cannot continue without a pending frame, so a failed request
/// moves it to idle.
fn track_request(frame_loop: &mut FrameLoop, request: Result<i32, Error>) -> Result<i32, Error> {
    if request.is_err() {
        frame_loop.stop();
    }
    request
}

/// Drives a [`FrameLoop`] from `requestAnimationFrame`.
///
/// The callback re-schedules itself after every frame for as long as the
/// loop is running. [`AnimationHandle::stop`] halts it; nothing else does.
#[derive(Debug)]
pub struct AnimationHandle {
    /// The loop state shared with the frame callback.
    frame_loop: Rc<RefCell<FrameLoop>>,
    /// Id of the pending animation frame request.
    request_id: Rc<Cell<Option<i32>>>,
    /// The self-scheduling frame callback.
    callback: FrameCallback,
}

impl AnimationHandle {
    /// Starts the loop and schedules the first frame.
    ///
    /// `on_frame` receives the loop state and the frame timestamp and returns
    /// whether another frame should be scheduled.
    pub(crate) fn start<F>(frame_loop: Rc<RefCell<FrameLoop>>, mut on_frame: F) -> Result<Self, Error>
    where
        F: FnMut(&mut FrameLoop, f64) -> bool + 'static,
    {
        frame_loop.borrow_mut().start();
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        *callback.borrow_mut() = Some(Closure::wrap(Box::new({
            let cb = callback.clone();
            let frame_loop = frame_loop.clone();
            let request_id = request_id.clone();
            move |timestamp: f64| {
                request_id.set(None);
                let schedule_next = {
                    let mut frame_loop = frame_loop.borrow_mut();
                    on_frame(&mut *frame_loop, timestamp) && frame_loop.is_running()
                };
                if !schedule_next {
                    return;
                }
                if let Some(closure) = cb.borrow().as_ref() {
                    let request = request_animation_frame(closure);
                    match track_request(&mut frame_loop.borrow_mut(), request) {
                        Ok(id) => request_id.set(Some(id)),
                        Err(e) => log_warn(&format!("math backdrop: animation stopped: {e}")),
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(closure) = callback.borrow().as_ref() {
            request_id.set(Some(request_animation_frame(closure)?));
        }

        Ok(Self {
            frame_loop,
            request_id,
            callback,
        })
    }

    /// Returns `true` while frames are being scheduled.
    pub fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }

    /// Returns how many frames have been rendered.
    pub fn frames(&self) -> u64 {
        self.frame_loop.borrow().frames()
    }

    /// Stops the loop and cancels the pending frame.
    ///
    /// Must not be called from inside the frame callback.
    pub fn stop(&self) {
        self.frame_loop.borrow_mut().stop();
        if let Some(id) = self.request_id.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The callback holds a clone of itself; dropping it here breaks the cycle.
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_frame_request_stops_the_loop() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();

        let request = Err(Error::JsError("requestAnimationFrame failed".into()));
        assert!(track_request(&mut frame_loop, request).is_err());
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_granted_frame_request_keeps_running() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();

        assert_eq!(track_request(&mut frame_loop, Ok(7)).unwrap(), 7);
        assert!(frame_loop.is_running());
    }
}
