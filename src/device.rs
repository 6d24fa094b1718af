use crate::core::prefs::DeviceSignals;
use crate::dom;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys as web;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(pointer:fine) and (hover:hover)";

fn prop(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn save_data(navigator: &web::Navigator) -> bool {
    ["connection", "mozConnection", "webkitConnection"]
        .iter()
        .find_map(|name| prop(navigator, name))
        .and_then(|conn| prop(&conn, "saveData"))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Read the low-power hints; missing APIs read as "not low-power".
pub fn read_signals(window: &web::Window) -> DeviceSignals {
    let navigator = window.navigator();
    let positive = |v: f64| (v.is_finite() && v > 0.0).then_some(v);
    DeviceSignals {
        reduced_motion: dom::media_matches(window, REDUCED_MOTION_QUERY),
        save_data: save_data(&navigator),
        device_memory: prop(&navigator, "deviceMemory")
            .and_then(|v| v.as_f64())
            .and_then(positive),
        hardware_concurrency: positive(navigator.hardware_concurrency()),
    }
}

/// `ontouchstart` in window, or any touch points reported.
pub fn is_touch_device(window: &web::Window) -> bool {
    let has_touch_handler =
        Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_handler || window.navigator().max_touch_points() > 0
}

#[inline]
pub fn has_fine_pointer(window: &web::Window) -> bool {
    dom::media_matches(window, FINE_POINTER_QUERY)
}
