use crate::controller::FxContext;
use crate::core::constants::{HEADER_HIDDEN_CLASS, HEADER_SELECTOR, PARALLAX_SELECTOR};
use crate::core::motion::{self, parse_parallax_factor, viewport_distance};
use crate::core::scroll::{HeaderVisibility, ScrollSample, ScrollState};
use crate::core::MotionPolicy;
use crate::dom::{self, Listener, Observer};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParallaxItem {
    el: web::HtmlElement,
    factor: f64,
    visible: bool,
}

type ParallaxItems = Rc<RefCell<Vec<ParallaxItem>>>;

/// Scroll-driven outputs: the root scroll vars, header auto-hide and the
/// per-element `--parY` depth offsets.
pub struct ScrollFx {
    pub frame: FrameLoop,
    parallax: FrameLoop,
    items: ParallaxItems,
    observer: RefCell<Option<Observer>>,
}

impl ScrollFx {
    /// Put every parallax element back at zero offset.
    pub fn rest_parallax(&self) {
        self.parallax.cancel();
        for item in self.items.borrow().iter() {
            dom::set_var(&item.el, "--parY", &motion::px(0.0));
        }
    }

    /// Stop both loops and disconnect the visibility observer.
    pub fn shutdown(&self) {
        self.frame.cancel();
        self.parallax.cancel();
        self.observer.borrow_mut().take();
    }
}

fn collect_parallax(document: &web::Document) -> Vec<ParallaxItem> {
    dom::query_html_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let factor = parse_parallax_factor(el.get_attribute("data-parallax").as_deref())?;
            Some(ParallaxItem {
                el,
                factor,
                visible: false,
            })
        })
        .collect()
}

/// Track which parallax items are near the viewport so each frame only
/// touches those. Without `IntersectionObserver` every item stays live.
fn observe_parallax(ctx: &FxContext, items: &ParallaxItems) -> Option<Observer> {
    if items.borrow().is_empty() {
        return None;
    }
    let tracked = items.clone();
    let observer = Observer::new(0.0, &ctx.config.parallax_root_margin, move |entry, _| {
        let target = entry.target();
        let mut items = tracked.borrow_mut();
        if let Some(item) = items
            .iter_mut()
            .find(|item| AsRef::<web::Element>::as_ref(&item.el) == &target)
        {
            item.visible = entry.is_intersecting();
        }
    });
    match observer {
        Ok(observer) => {
            for item in items.borrow().iter() {
                observer.observe(&item.el);
            }
            Some(observer)
        }
        Err(e) => {
            log::warn!("[parallax] no IntersectionObserver ({:?}); updating all", e);
            for item in items.borrow_mut().iter_mut() {
                item.visible = true;
            }
            None
        }
    }
}

fn apply_header(header: &web::HtmlElement, visibility: HeaderVisibility) {
    match visibility {
        HeaderVisibility::Show => {
            _ = header.class_list().remove_1(HEADER_HIDDEN_CLASS);
        }
        HeaderVisibility::Hide => {
            _ = header.class_list().add_1(HEADER_HIDDEN_CLASS);
        }
        HeaderVisibility::Keep => {}
    }
}

pub fn wire(ctx: &Rc<FxContext>, listeners: &mut Vec<Listener>) -> ScrollFx {
    let items: ParallaxItems = Rc::new(RefCell::new(if ctx.reduced_motion {
        Vec::new()
    } else {
        collect_parallax(&ctx.document)
    }));
    let observer = observe_parallax(ctx, &items);

    let parallax = {
        let ctx = ctx.clone();
        let items = items.clone();
        FrameLoop::new(move |_| {
            if ctx.calm() {
                return false;
            }
            let vh = dom::viewport_size(&ctx.window).y;
            let cfg = &ctx.config;
            for item in items.borrow().iter().filter(|item| item.visible) {
                let dist = viewport_distance(&dom::bounds(&item.el), vh);
                let offset = motion::parallax_offset(
                    dist,
                    item.factor,
                    cfg.parallax_gain,
                    cfg.parallax_limit_px,
                );
                dom::set_var(&item.el, "--parY", &motion::px(offset));
            }
            false
        })
    };

    let frame = {
        let ctx = ctx.clone();
        let parallax = parallax.clone();
        let header = dom::query_html(&ctx.document, HEADER_SELECTOR);
        let mut state = ScrollState::new(
            dom::scroll_y(&ctx.window),
            &ctx.config,
            MotionPolicy::for_reduced_motion(ctx.reduced_motion),
        );
        FrameLoop::new(move |_| {
            let document_h = ctx
                .document
                .document_element()
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(0.0);
            let sample = ScrollSample {
                scroll_y: dom::scroll_y(&ctx.window),
                viewport_h: dom::viewport_size(&ctx.window).y,
                document_h,
            };
            let out = state.advance(sample, ctx.calm());
            if let Some(header) = &header {
                apply_header(header, out.header);
            }

            let v = out.values;
            dom::set_var(&ctx.root, "--scroll", &format!("{:.4}", v.progress));
            dom::set_var(&ctx.root, "--scrollBlur", &motion::px(v.blur_px));
            dom::set_var(&ctx.root, "--heroWordmarkY", &motion::px(v.hero_y_px));
            dom::set_var(&ctx.root, "--heroWordmarkSkew", &motion::deg(v.hero_skew_deg));
            parallax.request();
            out.animating
        })
    };

    let win: &web::EventTarget = ctx.window.as_ref();
    for kind in ["scroll", "resize"] {
        let frame = frame.clone();
        listeners.push(Listener::add(win, kind, true, move |_| frame.request()));
    }
    frame.request();

    ScrollFx {
        frame,
        parallax,
        items,
        observer: RefCell::new(observer),
    }
}
