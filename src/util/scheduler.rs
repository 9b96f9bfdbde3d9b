//! Deferred-callback scheduling for UI transitions.
//!
//! ARCHITECTURE
//! ============
//! Timer-driven UI code (the toast lifecycle) talks to this trait instead
//! of `requestAnimationFrame`/`setTimeout` directly, so tests can drive
//! transitions with a virtual clock instead of real timers.

use std::time::Duration;

/// Fire-and-forget scheduling of one-shot callbacks.
pub trait Scheduler {
    /// Run `callback` on the next animation frame (or as soon as possible
    /// when frame scheduling is unavailable).
    fn next_frame(&self, callback: Box<dyn FnOnce()>);

    /// Run `callback` once after `delay`.
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Browser scheduler backed by `requestAnimationFrame` and `setTimeout`.
#[cfg(feature = "web")]
pub struct BrowserScheduler;

#[cfg(feature = "web")]
impl Scheduler for BrowserScheduler {
    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            callback();
            return;
        };

        let slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(callback)));
        let slot_for_frame = Rc::clone(&slot);
        let closure = Closure::once(move || {
            if let Some(callback) = slot_for_frame.borrow_mut().take() {
                callback();
            }
        });

        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_ok()
        {
            closure.forget();
        } else if let Some(callback) = slot.borrow_mut().take() {
            callback();
        }
    }

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || callback()).forget();
    }
}
