//! Controller configuration.

use super::constants::*;
use super::smoothing::clamp_damping;
use serde::Deserialize;

/// Tuning for every behavior the controller wires up.
///
/// `Default` reproduces the site's stock look. Pages pass a partial options
/// object (camelCase keys) to `PageEffects.attach`; missing keys keep their
/// defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    pub storage_key: String,

    pub double_tap_window_ms: f64,
    pub idle_timeout_ms: u32,

    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub reveal_stagger_cap_ms: u32,

    pub anchor_header_offset_px: f64,
    pub anchor_duration_ms: f64,

    pub parallax_root_margin: String,
    pub parallax_gain: f64,
    pub parallax_limit_px: f64,

    pub scroll_damping: f64,
    pub magnet_damping: f64,
    pub tilt_damping: f64,
    pub settle_epsilon: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            storage_key: LITE_STORAGE_KEY.to_string(),
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            idle_timeout_ms: IDLE_TIMEOUT_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            reveal_stagger_cap_ms: REVEAL_STAGGER_CAP_MS,
            anchor_header_offset_px: ANCHOR_HEADER_OFFSET_PX,
            anchor_duration_ms: ANCHOR_SCROLL_DURATION_MS,
            parallax_root_margin: PARALLAX_ROOT_MARGIN.to_string(),
            parallax_gain: PARALLAX_GAIN,
            parallax_limit_px: PARALLAX_LIMIT_PX,
            scroll_damping: SCROLL_DAMPING,
            magnet_damping: MAGNET_DAMPING,
            tilt_damping: TILT_DAMPING,
            settle_epsilon: SETTLE_EPSILON,
        }
    }
}

impl FxConfig {
    /// Pull out-of-range values back to something the loops can run with.
    /// Non-finite numbers fall back to their defaults.
    pub fn normalized(mut self) -> Self {
        self.scroll_damping = clamp_damping(self.scroll_damping);
        self.magnet_damping = clamp_damping(self.magnet_damping);
        self.tilt_damping = clamp_damping(self.tilt_damping);
        if !self.settle_epsilon.is_finite() || self.settle_epsilon <= 0.0 {
            self.settle_epsilon = SETTLE_EPSILON;
        }
        self.reveal_threshold = finite_or(self.reveal_threshold, REVEAL_THRESHOLD).clamp(0.0, 1.0);
        self.double_tap_window_ms =
            finite_or(self.double_tap_window_ms, DOUBLE_TAP_WINDOW_MS).max(0.0);
        self.anchor_duration_ms =
            finite_or(self.anchor_duration_ms, ANCHOR_SCROLL_DURATION_MS).max(0.0);
        self.anchor_header_offset_px =
            finite_or(self.anchor_header_offset_px, ANCHOR_HEADER_OFFSET_PX).max(0.0);
        self.parallax_gain = finite_or(self.parallax_gain, PARALLAX_GAIN);
        self.parallax_limit_px = finite_or(self.parallax_limit_px, PARALLAX_LIMIT_PX).abs();
        if self.storage_key.is_empty() {
            self.storage_key = LITE_STORAGE_KEY.to_string();
        }
        self
    }
}

#[inline]
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
