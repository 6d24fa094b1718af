use crate::controller::FxContext;
use crate::core::constants::{INVIEW_CLASS, REVEAL_SELECTOR};
use crate::core::reveal::{stagger_delay_ms, RevealSet};
use crate::dom::{self, Observer};
use web_sys as web;

/// Stagger and observe every `[data-reveal]` element. Each one gets
/// `is-inview` the first time it intersects and is then unobserved.
pub fn wire(ctx: &FxContext) -> Option<Observer> {
    let items = dom::query_html_all(&ctx.document, REVEAL_SELECTOR);
    if items.is_empty() {
        return None;
    }
    let cfg = &ctx.config;
    for (i, el) in items.iter().enumerate() {
        let delay = stagger_delay_ms(i, cfg.reveal_stagger_ms, cfg.reveal_stagger_cap_ms);
        dom::set_var(el, "transition-delay", &format!("{}ms", delay));
    }

    let elements: Vec<web::Element> = items.into_iter().map(web::Element::from).collect();
    let mut revealed = RevealSet::new(elements.len());
    let observed = elements.clone();
    let observer = Observer::new(
        cfg.reveal_threshold,
        &cfg.reveal_root_margin,
        move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            let Some(i) = elements.iter().position(|el| *el == target) else {
                return;
            };
            if revealed.reveal(i) {
                _ = target.class_list().add_1(INVIEW_CLASS);
            }
            observer.unobserve(&target);
        },
    );

    match observer {
        Ok(observer) => {
            for el in &observed {
                observer.observe(el);
            }
            log::info!("[reveal] observing {} elements", observed.len());
            Some(observer)
        }
        Err(e) => {
            log::warn!("[reveal] no IntersectionObserver ({:?}); revealing all", e);
            for el in &observed {
                _ = el.class_list().add_1(INVIEW_CLASS);
            }
            None
        }
    }
}
