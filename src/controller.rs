use crate::chrome;
use crate::core::{AttachLease, FxConfig, LiteMode};
use crate::device;
use crate::dom::{self, Listener, Observer};
use crate::events::{self, pointer::Interactions, scroll::ScrollFx};
use crate::storage::LocalStore;
use crate::toggle::{self, LiteToggle};
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Page handles and flags shared by every behavior.
pub struct FxContext {
    pub window: web::Window,
    pub document: web::Document,
    pub root: web::HtmlElement,
    pub config: FxConfig,
    pub reduced_motion: bool,
    /// Hover-capable fine pointer hardware (not affected by lite mode).
    pub fine_pointer: bool,
    pub lite: RefCell<LiteMode>,
}

impl FxContext {
    #[inline]
    pub fn is_lite(&self) -> bool {
        self.lite.borrow().enabled()
    }

    /// No decorative motion: reduced motion requested or lite mode on.
    #[inline]
    pub fn calm(&self) -> bool {
        self.reduced_motion || self.is_lite()
    }
}

/// Owns everything attached to the page. `detach` removes all of it.
pub struct Controller {
    ctx: Rc<FxContext>,
    attached: Cell<bool>,
    lease: RefCell<Option<AttachLease>>,
    listeners: RefCell<Vec<Listener>>,
    observers: RefCell<Vec<Observer>>,
    scroll: Rc<ScrollFx>,
    interactions: Rc<RefCell<Option<Interactions>>>,
    toggle: RefCell<Option<LiteToggle>>,
}

impl Controller {
    pub fn attach(config: FxConfig) -> anyhow::Result<Rc<Self>> {
        let lease = AttachLease::acquire().ok_or_else(|| anyhow!("already attached"))?;
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let root = dom::root_element(&document).ok_or_else(|| anyhow!("no root element"))?;

        let config = config.normalized();
        let signals = device::read_signals(&window);
        let lite = LiteMode::resolve(&LocalStore, &config.storage_key, &signals);
        toggle::apply_lite_class(&root, lite.enabled());
        let fine_pointer = device::has_fine_pointer(&window);

        log::info!(
            "[fx] attach lite={} ({:?}) reduced_motion={} fine_pointer={}",
            lite.enabled(),
            lite.source(),
            signals.reduced_motion,
            fine_pointer
        );

        let ctx = Rc::new(FxContext {
            window,
            document,
            root,
            config,
            reduced_motion: signals.reduced_motion,
            fine_pointer,
            lite: RefCell::new(lite),
        });

        let mut listeners = Vec::new();
        let mut observers = Vec::new();

        events::gesture::wire(&ctx, &mut listeners);
        chrome::prefix_project_links(&ctx.window, &ctx.document);
        chrome::stamp_year(&ctx.document);
        observers.extend(events::reveal::wire(&ctx));
        listeners.push(events::anchor::wire(&ctx));
        let scroll = Rc::new(events::scroll::wire(&ctx, &mut listeners));

        let interactions: Rc<RefCell<Option<Interactions>>> = Rc::new(RefCell::new(None));
        let toggle = toggle::mount(&ctx, {
            let interactions = interactions.clone();
            let scroll = scroll.clone();
            move |enabled| {
                if enabled {
                    if let Some(active) = interactions.borrow().as_ref() {
                        active.snap_to_rest();
                    }
                    scroll.rest_parallax();
                }
                scroll.frame.request();
            }
        });

        let controller = Rc::new(Self {
            ctx,
            attached: Cell::new(true),
            lease: RefCell::new(Some(lease)),
            listeners: RefCell::new(listeners),
            observers: RefCell::new(observers),
            scroll,
            interactions,
            toggle: RefCell::new(toggle),
        });

        if controller.ctx.fine_pointer {
            let weak = Rc::downgrade(&controller);
            dom::on_idle(
                &controller.ctx.window,
                controller.ctx.config.idle_timeout_ms,
                move || {
                    if let Some(controller) = weak.upgrade() {
                        controller.wire_pointer_effects();
                    }
                },
            );
        }
        Ok(controller)
    }

    fn wire_pointer_effects(&self) {
        if !self.attached.get() {
            return;
        }
        let mut listeners = self.listeners.borrow_mut();
        let wired = events::pointer::wire(&self.ctx, &mut listeners);
        if self.ctx.is_lite() {
            wired.snap_to_rest();
        }
        *self.interactions.borrow_mut() = Some(wired);
    }

    #[inline]
    pub fn is_lite(&self) -> bool {
        self.ctx.is_lite()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Remove every listener, observer, pending frame and the mounted toggle,
    /// then free the slot so the page may attach again.
    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        self.listeners.borrow_mut().clear();
        self.observers.borrow_mut().clear();
        self.scroll.shutdown();
        self.interactions.borrow_mut().take();
        self.toggle.borrow_mut().take();
        self.lease.borrow_mut().take();
        log::info!("[fx] detached");
    }
}
