//! Scroll-derived visual state: page progress, scroll-speed blur, the hero
//! wordmark drift and skew, and header auto-hide.

use super::config::FxConfig;
use super::constants::*;
use super::smoothing::{Damped, MotionPolicy};

/// Scroll geometry read once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_h: f64,
    pub document_h: f64,
}

/// Where each scroll channel should end up for a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTargets {
    pub progress: f64,
    pub blur_px: f64,
    pub hero_y_px: f64,
    pub hero_skew_deg: f64,
}

/// Compute the targets for `sample`, given the previous frame's `scrollY`.
/// `calm` (reduced motion or lite mode) forces the blur to zero.
pub fn scroll_targets(sample: ScrollSample, previous_y: f64, calm: bool) -> ScrollTargets {
    let max = (sample.document_h - sample.viewport_h).max(1.0);
    let progress = sample.scroll_y / max;

    let blur_px = if calm {
        0.0
    } else {
        ((sample.scroll_y - previous_y).abs() / SCROLL_BLUR_DIVISOR).min(SCROLL_BLUR_MAX_PX)
    };

    let drift = if sample.viewport_h > 0.0 {
        (sample.scroll_y / sample.viewport_h).clamp(0.0, HERO_DRIFT_MAX)
    } else {
        0.0
    };
    let hero_y_px = drift * HERO_RISE_PX;
    let hero_skew_deg = (HERO_SKEW_REST_DEG + drift * -HERO_SKEW_REST_DEG)
        .clamp(HERO_SKEW_REST_DEG, HERO_SKEW_MAX_DEG);

    ScrollTargets {
        progress,
        blur_px,
        hero_y_px,
        hero_skew_deg,
    }
}

/// What to do with the header for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Show,
    Hide,
    Keep,
}

/// Hide while scrolling down, show when scrolling up or back at the top.
#[inline]
pub fn header_visibility(scroll_y: f64, delta: f64) -> HeaderVisibility {
    if scroll_y <= 0.0 {
        HeaderVisibility::Show
    } else if delta > 0.0 {
        HeaderVisibility::Hide
    } else if delta < 0.0 {
        HeaderVisibility::Show
    } else {
        HeaderVisibility::Keep
    }
}

/// Output of one scroll frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub values: ScrollTargets,
    pub header: HeaderVisibility,
    /// Another frame is needed to finish smoothing.
    pub animating: bool,
}

/// Smoothed scroll channels plus the previous frame's position.
#[derive(Clone, Debug)]
pub struct ScrollState {
    last_y: f64,
    progress: Damped<f64>,
    blur: Damped<f64>,
    hero_y: Damped<f64>,
    hero_skew: Damped<f64>,
}

impl ScrollState {
    pub fn new(initial_y: f64, config: &FxConfig, policy: MotionPolicy) -> Self {
        let channel = |v: f64| {
            Damped::new(v, config.scroll_damping, config.settle_epsilon).with_policy(policy)
        };
        Self {
            last_y: initial_y,
            progress: channel(0.0),
            blur: channel(0.0),
            hero_y: channel(0.0),
            hero_skew: channel(HERO_SKEW_REST_DEG),
        }
    }

    /// Feed this frame's geometry and advance every channel one tick.
    pub fn advance(&mut self, sample: ScrollSample, calm: bool) -> ScrollFrame {
        let delta = sample.scroll_y - self.last_y;
        let targets = scroll_targets(sample, self.last_y, calm);
        self.last_y = sample.scroll_y;

        self.progress.set_target(targets.progress);
        self.blur.set_target(targets.blur_px);
        self.hero_y.set_target(targets.hero_y_px);
        self.hero_skew.set_target(targets.hero_skew_deg);

        // tick all four; no short-circuit
        let animating = [
            self.progress.tick(),
            self.blur.tick(),
            self.hero_y.tick(),
            self.hero_skew.tick(),
        ]
        .contains(&true);

        ScrollFrame {
            values: self.values(),
            header: header_visibility(sample.scroll_y, delta),
            animating,
        }
    }

    pub fn values(&self) -> ScrollTargets {
        ScrollTargets {
            progress: self.progress.current(),
            blur_px: self.blur.current(),
            hero_y_px: self.hero_y.current(),
            hero_skew_deg: self.hero_skew.current(),
        }
    }
}
