use crate::core::motion::Bounds;
use glam::DVec2;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Like [`query_all`], keeping only elements with an inline style (skips SVG).
pub fn query_html_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set a CSS custom property (or any style property) inline.
#[inline]
pub fn set_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn bounds(el: &web::Element) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> DVec2 {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    DVec2::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// `matchMedia(query).matches`, `false` where unsupported.
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// The element an event was dispatched to, if it is an element.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Run `f` once the document is interactive.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &opts,
    );
}

/// Run `f` when the browser is idle (or after `timeout_ms` at the latest).
/// Without `requestIdleCallback` it runs on the next task.
pub fn on_idle(window: &web::Window, timeout_ms: u32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let idle = Reflect::get(window, &JsValue::from_str("requestIdleCallback"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok());
    if let Some(request_idle) = idle {
        let opts = Object::new();
        _ = Reflect::set(&opts, &JsValue::from_str("timeout"), &JsValue::from(timeout_ms));
        if request_idle.call2(window, &callback, &opts).is_ok() {
            return;
        }
    }
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }

    /// Listen for a specific event interface; events of any other type are skipped.
    pub fn typed<E: JsCast + 'static>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self {
        Self::add(target, kind, passive, move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` that disconnects when dropped.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver)
            + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    #[inline]
    pub fn observe(&self, el: &web::Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
