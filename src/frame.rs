use crate::core::FrameToken;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FrameInner {
    token: Cell<FrameToken>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameInner {
    fn schedule(&self) {
        let mut token = self.token.get();
        token.claim(|| {
            let w = web::window()?;
            let tick = self.tick.borrow();
            let cb = tick.as_ref()?;
            w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
        });
        self.token.set(token);
    }

    fn release(&self) {
        let mut token = self.token.get();
        token.release();
        self.token.set(token);
    }

    fn cancel(&self) {
        let mut token = self.token.get();
        if let Some(id) = token.cancel() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.token.set(token);
    }
}

/// A `requestAnimationFrame` loop around one step function.
///
/// At most one frame is outstanding: `request` while a frame is pending does
/// nothing. The step receives the frame timestamp and returns whether it
/// needs another frame; returning `false` lets the loop go idle until the
/// next `request`.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            token: Cell::new(FrameToken::idle()),
            tick: RefCell::new(None),
        });
        let weak: Weak<FrameInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.release();
            if step(ts) {
                inner.schedule();
            }
        }) as Box<dyn FnMut(f64)>));
        Self { inner }
    }

    #[inline]
    pub fn request(&self) {
        self.inner.schedule();
    }

    #[inline]
    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameInner {
    fn drop(&mut self) {
        self.cancel();
    }
}
