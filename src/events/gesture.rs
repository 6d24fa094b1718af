use crate::controller::FxContext;
use crate::core::constants::GESTURE_EXEMPT_SELECTOR;
use crate::core::gesture::{is_multi_touch, DoubleTapGuard};
use crate::device;
use crate::dom::{self, Listener};
use web_sys as web;

// Safari's non-standard pinch events.
const SAFARI_GESTURES: [&str; 3] = ["gesturestart", "gesturechange", "gestureend"];

/// Form controls keep their native gestures.
fn is_exempt(ev: &web::Event) -> bool {
    dom::event_element(ev)
        .and_then(|el| el.closest(GESTURE_EXEMPT_SELECTOR).ok().flatten())
        .is_some()
}

/// Suppress pinch and double-tap zoom on touch devices. Listeners are
/// non-passive so `preventDefault` takes effect.
pub fn wire(ctx: &FxContext, listeners: &mut Vec<Listener>) {
    if !device::is_touch_device(&ctx.window) {
        return;
    }
    let target: &web::EventTarget = ctx.document.as_ref();

    for kind in ["touchstart", "touchmove"] {
        listeners.push(Listener::typed(target, kind, false, |ev: web::TouchEvent| {
            if is_multi_touch(ev.touches().length()) && !is_exempt(&ev) {
                ev.prevent_default();
            }
        }));
    }

    let mut taps = DoubleTapGuard::new(ctx.config.double_tap_window_ms);
    listeners.push(Listener::typed(target, "touchend", false, move |ev: web::TouchEvent| {
        if is_exempt(&ev) {
            return;
        }
        if taps.touch_end(js_sys::Date::now()) {
            ev.prevent_default();
        }
    }));

    for kind in SAFARI_GESTURES {
        listeners.push(Listener::add(target, kind, false, |ev: web::Event| {
            if !is_exempt(&ev) {
                ev.prevent_default();
            }
        }));
    }
    log::info!("[gesture] zoom suppression on");
}
