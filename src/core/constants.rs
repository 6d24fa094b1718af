// Tuning constants for the page effects.
//
// Distances are CSS pixels, durations milliseconds, angles degrees.

// Lite mode
pub const LITE_STORAGE_KEY: &str = "site-lite-mode";
pub const LOW_DEVICE_MEMORY_GB: f64 = 4.0; // at or below => lite
pub const LOW_HARDWARE_CONCURRENCY: f64 = 4.0; // at or below => lite

// Gesture suppression
pub const DOUBLE_TAP_WINDOW_MS: f64 = 340.0;
pub const GESTURE_EXEMPT_SELECTOR: &str = "input, textarea, select, [contenteditable='true']";

// Idle scheduling
pub const IDLE_TIMEOUT_MS: u32 = 1200;

// Reveal choreography
pub const REVEAL_THRESHOLD: f64 = 0.14;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -8% 0px";
pub const REVEAL_STAGGER_MS: u32 = 45;
pub const REVEAL_STAGGER_CAP_MS: u32 = 260;

// Anchor navigation
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 88.0; // fixed header height
pub const ANCHOR_SCROLL_DURATION_MS: f64 = 720.0;

// Element parallax
pub const PARALLAX_ROOT_MARGIN: &str = "15% 0px 15% 0px";
pub const PARALLAX_GAIN: f64 = 110.0;
pub const PARALLAX_LIMIT_PX: f64 = 34.0;

// Background layers, px per unit of normalized pointer offset
pub const MESH_SHIFT_PX: [f64; 2] = [-14.0, -12.0];
pub const ORBS_SHIFT_PX: [f64; 2] = [12.0, 10.0];

// Scroll-speed blur
pub const SCROLL_BLUR_MAX_PX: f64 = 10.0;
pub const SCROLL_BLUR_DIVISOR: f64 = 18.0; // px scrolled per px of blur

// Hero wordmark
pub const HERO_DRIFT_MAX: f64 = 1.4; // viewports
pub const HERO_RISE_PX: f64 = 22.0;
pub const HERO_SKEW_REST_DEG: f64 = -6.0;
pub const HERO_SKEW_MAX_DEG: f64 = 1.0;

// Card hover tilt limits
pub const CARD_TILT_Y_DEG: f64 = 10.0;
pub const CARD_TILT_X_DEG: f64 = 8.0;

// Magnetic buttons
pub const MAGNET_GAIN_PX: [f64; 2] = [10.0, 8.0];

// Hero tilt
pub const TILT_X_LIMIT_DEG: f64 = 10.0;
pub const TILT_Y_LIMIT_DEG: f64 = 12.0;
pub const TILT_PERSPECTIVE_PX: f64 = 900.0;

// Damping factors (fraction of the remaining gap closed per frame)
pub const SCROLL_DAMPING: f64 = 0.2;
pub const MAGNET_DAMPING: f64 = 0.14;
pub const TILT_DAMPING: f64 = 0.08;

// Loops stop once every channel is within this gap of its target
pub const SETTLE_EPSILON: f64 = 0.002;

// Element selectors
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const CARD_SELECTOR: &str = ".card";
pub const HEADER_SELECTOR: &str = ".top";
pub const HEADER_INNER_SELECTOR: &str = ".top__inner";
pub const MESH_SELECTOR: &str = ".bg__mesh";
pub const ORBS_SELECTOR: &str = ".bg__orbs";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ROOT_LINK_SELECTOR: &str = "a[href^=\"/\"]";

// Classes
pub const LITE_CLASS: &str = "is-lite";
pub const INVIEW_CLASS: &str = "is-inview";
pub const HEADER_HIDDEN_CLASS: &str = "is-hidden";
pub const LITE_TOGGLE_CLASS: &str = "lite-toggle";
