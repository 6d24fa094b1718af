use crate::controller::FxContext;
use crate::core::constants::{HEADER_INNER_SELECTOR, LITE_CLASS, LITE_TOGGLE_CLASS};
use crate::dom::Listener;
use crate::storage::LocalStore;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn apply_lite_class(root: &web::HtmlElement, enabled: bool) {
    _ = root.class_list().toggle_with_force(LITE_CLASS, enabled);
}

fn sync_button(button: &web::Element, enabled: bool, label: &str) {
    _ = button.set_attribute("aria-pressed", if enabled { "true" } else { "false" });
    button.set_text_content(Some(label));
}

/// The header button flipping lite mode. Removed from the page on drop.
pub struct LiteToggle {
    button: web::Element,
    _click: Listener,
}

impl Drop for LiteToggle {
    fn drop(&mut self) {
        self.button.remove();
    }
}

/// Mount the toggle into the header. `None` without a header or when a
/// toggle is already there.
///
/// A click flips and persists the preference, updates the root class and
/// the button, then hands the new state to `on_change`.
pub fn mount(ctx: &Rc<FxContext>, on_change: impl Fn(bool) + 'static) -> Option<LiteToggle> {
    let header = ctx.document.query_selector(HEADER_INNER_SELECTOR).ok().flatten()?;
    let existing = header
        .query_selector(&format!(".{}", LITE_TOGGLE_CLASS))
        .ok()
        .flatten();
    if existing.is_some() {
        return None;
    }

    let button = ctx.document.create_element("button").ok()?;
    _ = button.set_attribute("type", "button");
    _ = button.set_attribute("class", &format!("button button--ghost {}", LITE_TOGGLE_CLASS));
    _ = button.set_attribute("title", "Toggle Lite mode (reduces motion/effects)");
    {
        let lite = ctx.lite.borrow();
        sync_button(&button, lite.enabled(), lite.label());
    }

    let click = {
        let ctx = ctx.clone();
        let button_ref = button.clone();
        Listener::add(button.as_ref(), "click", true, move |_| {
            let (enabled, label) = {
                let mut lite = ctx.lite.borrow_mut();
                lite.toggle(&LocalStore, &ctx.config.storage_key);
                (lite.enabled(), lite.label())
            };
            apply_lite_class(&ctx.root, enabled);
            sync_button(&button_ref, enabled, label);
            log::info!("[lite] toggled enabled={}", enabled);
            on_change(enabled);
        })
    };

    if let Err(e) = header.append_child(&button) {
        log::warn!("[lite] could not mount toggle: {:?}", e);
        return None;
    }
    Some(LiteToggle {
        button,
        _click: click,
    })
}
