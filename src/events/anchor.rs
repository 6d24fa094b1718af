use crate::controller::FxContext;
use crate::core::constants::ANCHOR_SELECTOR;
use crate::core::links::fragment_target;
use crate::core::motion::{anchor_destination, AnchorGlide};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Intercept clicks on same-page fragment links and glide to the target
/// instead of jumping, keeping the fragment in history.
pub fn wire(ctx: &Rc<FxContext>) -> Listener {
    let glide: Rc<RefCell<Option<AnchorGlide>>> = Rc::new(RefCell::new(None));

    let glide_loop = {
        let glide = glide.clone();
        let window = ctx.window.clone();
        FrameLoop::new(move |ts| {
            let mut slot = glide.borrow_mut();
            let Some(active) = slot.as_mut() else {
                return false;
            };
            let (y, arrived) = active.sample(ts);
            window.scroll_to_with_x_and_y(0.0, y);
            if arrived {
                *slot = None;
            }
            !arrived
        })
    };

    let ctx = ctx.clone();
    let target: &web::EventTarget = ctx.document.as_ref();
    let target = target.clone();
    Listener::typed(&target, "click", false, move |ev: web::MouseEvent| {
        let Some(link) = dom::event_element(&ev)
            .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = fragment_target(&href) else {
            return;
        };
        let Some(dest) = ctx.document.get_element_by_id(id) else {
            return;
        };
        ev.prevent_default();

        let start_y = dom::scroll_y(&ctx.window);
        let target_y = anchor_destination(
            dom::bounds(&dest).top,
            start_y,
            ctx.config.anchor_header_offset_px,
        );
        if ctx.reduced_motion {
            glide_loop.cancel();
            *glide.borrow_mut() = None;
            ctx.window.scroll_to_with_x_and_y(0.0, target_y);
        } else {
            *glide.borrow_mut() = Some(AnchorGlide::new(
                start_y,
                target_y,
                ctx.config.anchor_duration_ms,
            ));
            glide_loop.request();
        }

        if let Ok(history) = ctx.window.history() {
            _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
        }
    })
}
