use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Seconds on the same clock `requestAnimationFrame` stamps its frames with.
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

struct Inner {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl Inner {
    fn request(&self) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(_) => log::warn!("requestAnimationFrame refused, ripple frames paused"),
        }
    }
}

/// A `requestAnimationFrame` loop that sleeps while idle.
///
/// `on_frame` receives the frame time in seconds and returns whether it wants another frame.
/// `wake` re-arms a sleeping loop; `stop` cancels the pending frame and drops the callback.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn new<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let inner = Rc::new(Inner {
            window,
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if on_frame(timestamp / 1000.0) {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Some(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    pub fn wake(&self) {
        if !self.is_running() {
            self.inner.request();
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.inner.pending.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
