use crate::controller::FxContext;
use crate::core::constants::*;
use crate::core::motion::{self, Bounds};
use crate::core::Damped;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_point(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
fn translate(shift: DVec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", shift.x, shift.y)
}

/// A damped 2D pointer ratio driving one element's style.
struct Follower {
    el: web::HtmlElement,
    state: Rc<RefCell<Damped<DVec2>>>,
    frame: FrameLoop,
}

impl Follower {
    fn new(
        el: web::HtmlElement,
        k: f64,
        epsilon: f64,
        write: fn(&web::HtmlElement, DVec2),
    ) -> Self {
        let state = Rc::new(RefCell::new(Damped::new(DVec2::ZERO, k, epsilon)));
        let frame = {
            let el = el.clone();
            let state = state.clone();
            FrameLoop::new(move |_| {
                let mut s = state.borrow_mut();
                let more = s.tick();
                write(&el, s.current());
                more
            })
        };
        Self { el, state, frame }
    }

    fn retarget(&self, ratio: DVec2) {
        self.state.borrow_mut().set_target(ratio);
        self.frame.request();
    }

    fn rest(&self, write: fn(&web::HtmlElement, DVec2)) {
        self.frame.cancel();
        self.state.borrow_mut().snap_to(DVec2::ZERO);
        write(&self.el, DVec2::ZERO);
    }
}

fn write_magnet(el: &web::HtmlElement, ratio: DVec2) {
    let offset = motion::magnet_offset(ratio);
    dom::set_var(el, "--magX", &motion::px(offset.x));
    dom::set_var(el, "--magY", &motion::px(offset.y));
}

fn write_tilt(el: &web::HtmlElement, ratio: DVec2) {
    dom::set_var(el, "transform", &motion::hero_tilt_transform(ratio));
}

/// Everything wired by [`wire`]; kept so lite mode can snap it to rest.
pub struct Interactions {
    cards: Vec<web::HtmlElement>,
    magnets: Vec<Rc<Follower>>,
    tilt: Option<Rc<Follower>>,
    _background: FrameLoop,
}

impl Interactions {
    pub fn snap_to_rest(&self) {
        for magnet in &self.magnets {
            magnet.rest(write_magnet);
            dom::set_var(&magnet.el, "--btnLift", &motion::px(0.0));
        }
        for card in &self.cards {
            dom::set_var(card, "--rx", &motion::deg(0.0));
            dom::set_var(card, "--ry", &motion::deg(0.0));
        }
        if let Some(tilt) = &self.tilt {
            tilt.rest(write_tilt);
        }
    }
}

/// Spotlight position on the root and the background layer drift.
fn wire_background(ctx: &Rc<FxContext>, listeners: &mut Vec<Listener>) -> FrameLoop {
    let pointer = Rc::new(Cell::new(DVec2::ZERO));
    let mesh = dom::query_html(&ctx.document, MESH_SELECTOR);
    let orbs = dom::query_html(&ctx.document, ORBS_SELECTOR);

    let frame = {
        let pointer = pointer.clone();
        FrameLoop::new(move |_| {
            let p = pointer.get();
            if let Some(mesh) = &mesh {
                dom::set_var(mesh, "transform", &translate(motion::layer_shift(p, MESH_SHIFT_PX)));
            }
            if let Some(orbs) = &orbs {
                dom::set_var(orbs, "transform", &translate(motion::layer_shift(p, ORBS_SHIFT_PX)));
            }
            false
        })
    };

    let handler = {
        let ctx = ctx.clone();
        let frame = frame.clone();
        move |ev: web::PointerEvent| {
            if ctx.is_lite() {
                return;
            }
            let viewport = dom::viewport_size(&ctx.window);
            let client = client_point(&ev);
            pointer.set(motion::viewport_pointer(client, viewport));
            if viewport.x > 0.0 && viewport.y > 0.0 {
                let spot = client / viewport * 100.0;
                dom::set_var(&ctx.root, "--sx", &motion::percent(spot.x));
                dom::set_var(&ctx.root, "--sy", &motion::percent(spot.y));
            }
            if !ctx.reduced_motion {
                frame.request();
            }
        }
    };
    listeners.push(Listener::typed(ctx.window.as_ref(), "pointermove", true, handler));
    if !ctx.reduced_motion {
        frame.request();
    }
    frame
}

/// Radial hotspot and small rotation following the pointer over a card.
fn wire_card(ctx: &Rc<FxContext>, card: &web::HtmlElement, listeners: &mut Vec<Listener>) {
    let target: &web::EventTarget = card.as_ref();
    {
        let ctx = ctx.clone();
        let card = card.clone();
        let on_move = move |ev: web::PointerEvent| {
            if ctx.is_lite() {
                return;
            }
            let b: Bounds = dom::bounds(&card);
            let point = client_point(&ev);
            let hot = b.percent(point);
            dom::set_var(&card, "--mx", &motion::percent(hot.x));
            dom::set_var(&card, "--my", &motion::percent(hot.y));
            if !ctx.reduced_motion {
                let (rx, ry) = motion::card_tilt(b.centered_ratio(point));
                dom::set_var(&card, "--ry", &motion::deg(ry));
                dom::set_var(&card, "--rx", &motion::deg(rx));
            }
        };
        listeners.push(Listener::typed(target, "pointermove", true, on_move));
    }
    let card = card.clone();
    listeners.push(Listener::add(target, "pointerleave", true, move |_| {
        dom::set_var(&card, "--rx", &motion::deg(0.0));
        dom::set_var(&card, "--ry", &motion::deg(0.0));
    }));
}

/// Hook a damped follower to an element's pointer events. `ratio` maps the
/// element bounds and pointer to the follower target.
fn wire_follower(
    ctx: &Rc<FxContext>,
    follower: &Rc<Follower>,
    ratio: fn(&Bounds, DVec2) -> DVec2,
    listeners: &mut Vec<Listener>,
) {
    let target: &web::EventTarget = follower.el.as_ref();
    {
        let ctx = ctx.clone();
        let follower = follower.clone();
        let on_move = move |ev: web::PointerEvent| {
            if ctx.is_lite() {
                return;
            }
            let b = dom::bounds(&follower.el);
            follower.retarget(ratio(&b, client_point(&ev)));
        };
        listeners.push(Listener::typed(target, "pointermove", true, on_move));
    }
    let follower = follower.clone();
    listeners.push(Listener::add(target, "pointerleave", true, move |_| {
        follower.retarget(DVec2::ZERO);
    }));
}

fn hero_ratio(b: &Bounds, point: DVec2) -> DVec2 {
    // corner-origin ratio, centred
    if b.width <= 0.0 || b.height <= 0.0 {
        return DVec2::ZERO;
    }
    (point - DVec2::new(b.left, b.top)) / DVec2::new(b.width, b.height) - 0.5
}

/// Wire the hover effects. Called from an idle callback on fine-pointer
/// devices; handlers check lite mode on every event so toggling takes effect
/// without rewiring.
pub fn wire(ctx: &Rc<FxContext>, listeners: &mut Vec<Listener>) -> Interactions {
    let background = wire_background(ctx, listeners);

    let cards = dom::query_html_all(&ctx.document, CARD_SELECTOR);
    for card in &cards {
        wire_card(ctx, card, listeners);
    }

    let cfg = &ctx.config;
    let mut magnets = Vec::new();
    let mut tilt = None;
    if !ctx.reduced_motion {
        for el in dom::query_html_all(&ctx.document, MAGNETIC_SELECTOR) {
            let magnet = Rc::new(Follower::new(
                el,
                cfg.magnet_damping,
                cfg.settle_epsilon,
                write_magnet,
            ));
            wire_follower(ctx, &magnet, |b, p| b.centered_ratio(p), listeners);
            magnets.push(magnet);
        }

        if let Some(el) = dom::query_html(&ctx.document, TILT_SELECTOR) {
            let follower = Rc::new(Follower::new(
                el,
                cfg.tilt_damping,
                cfg.settle_epsilon,
                write_tilt,
            ));
            wire_follower(ctx, &follower, hero_ratio, listeners);
            tilt = Some(follower);
        }
    }

    log::info!(
        "[pointer] cards={} magnets={} tilt={}",
        cards.len(),
        magnets.len(),
        tilt.is_some()
    );
    Interactions {
        cards,
        magnets,
        tilt,
        _background: background,
    }
}
