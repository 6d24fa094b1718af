// Host-side tests for tuning constants and configuration defaults.

use page_fx::core::constants::*;
use page_fx::core::motion::parallax_offset;
use page_fx::core::FxConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_are_fractions() {
    for k in [SCROLL_DAMPING, MAGNET_DAMPING, TILT_DAMPING] {
        assert!(k > 0.0 && k <= 1.0);
    }
    assert!(SETTLE_EPSILON > 0.0 && SETTLE_EPSILON < 0.01);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // the cap is reachable but not on the first element
    assert!(REVEAL_STAGGER_CAP_MS > REVEAL_STAGGER_MS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);

    // skew rests below and tops out above zero
    assert!(HERO_SKEW_REST_DEG < 0.0 && HERO_SKEW_MAX_DEG > 0.0);

    // layers drift in opposite directions
    assert!(MESH_SHIFT_PX[0] * ORBS_SHIFT_PX[0] < 0.0);
    assert!(MESH_SHIFT_PX[1] * ORBS_SHIFT_PX[1] < 0.0);

    assert!(PARALLAX_LIMIT_PX > 0.0 && PARALLAX_GAIN > 0.0);
    assert!(ANCHOR_SCROLL_DURATION_MS > 0.0);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.storage_key, LITE_STORAGE_KEY);
    assert_eq!(cfg.reveal_root_margin, REVEAL_ROOT_MARGIN);
    assert_eq!(cfg.parallax_root_margin, PARALLAX_ROOT_MARGIN);
    assert_eq!(cfg.anchor_header_offset_px, ANCHOR_HEADER_OFFSET_PX);
    assert_eq!(cfg.magnet_damping, MAGNET_DAMPING);
    assert_eq!(cfg.clone().normalized(), cfg);
}

#[test]
fn normalized_repairs_bad_values() {
    let cfg = FxConfig {
        storage_key: String::new(),
        scroll_damping: 0.0,
        magnet_damping: 3.0,
        tilt_damping: f64::NAN,
        settle_epsilon: -1.0,
        reveal_threshold: 1.5,
        double_tap_window_ms: -10.0,
        anchor_duration_ms: -1.0,
        anchor_header_offset_px: -88.0,
        parallax_limit_px: -34.0,
        ..FxConfig::default()
    }
    .normalized();

    assert_eq!(cfg.storage_key, LITE_STORAGE_KEY);
    assert_eq!(cfg.scroll_damping, 0.01);
    assert_eq!(cfg.magnet_damping, 1.0);
    assert_eq!(cfg.tilt_damping, 0.01);
    assert_eq!(cfg.settle_epsilon, SETTLE_EPSILON);
    assert_eq!(cfg.reveal_threshold, 1.0);
    assert_eq!(cfg.double_tap_window_ms, 0.0);
    assert_eq!(cfg.anchor_duration_ms, 0.0);
    assert_eq!(cfg.anchor_header_offset_px, 0.0);
    assert_eq!(cfg.parallax_limit_px, 34.0);
}

#[test]
fn normalized_replaces_non_finite_numbers_with_defaults() {
    let cfg = FxConfig {
        reveal_threshold: f64::NAN,
        double_tap_window_ms: f64::INFINITY,
        anchor_duration_ms: f64::NAN,
        anchor_header_offset_px: f64::NEG_INFINITY,
        parallax_gain: f64::NAN,
        parallax_limit_px: f64::NAN,
        settle_epsilon: f64::INFINITY,
        ..FxConfig::default()
    }
    .normalized();

    assert_eq!(cfg.reveal_threshold, REVEAL_THRESHOLD);
    assert_eq!(cfg.double_tap_window_ms, DOUBLE_TAP_WINDOW_MS);
    assert_eq!(cfg.anchor_duration_ms, ANCHOR_SCROLL_DURATION_MS);
    assert_eq!(cfg.anchor_header_offset_px, ANCHOR_HEADER_OFFSET_PX);
    assert_eq!(cfg.parallax_gain, PARALLAX_GAIN);
    assert_eq!(cfg.parallax_limit_px, PARALLAX_LIMIT_PX);
    assert_eq!(cfg.settle_epsilon, SETTLE_EPSILON);

    // a NaN limit used to reach f64::clamp and panic on every parallax frame
    let offset = parallax_offset(0.2, 0.4, cfg.parallax_gain, cfg.parallax_limit_px);
    assert!(offset.is_finite());
    assert!(offset.abs() <= PARALLAX_LIMIT_PX);
}

#[test]
fn partial_options_keep_defaults_for_missing_keys() {
    let cfg: FxConfig = serde_json::from_str(
        r#"{ "parallaxGain": 60, "anchorHeaderOffsetPx": 64, "storageKey": "fx-lite" }"#,
    )
    .unwrap();

    assert_eq!(cfg.parallax_gain, 60.0);
    assert_eq!(cfg.anchor_header_offset_px, 64.0);
    assert_eq!(cfg.storage_key, "fx-lite");
    assert_eq!(cfg.parallax_limit_px, PARALLAX_LIMIT_PX);
    assert_eq!(cfg.reveal_root_margin, REVEAL_ROOT_MARGIN);
    assert_eq!(cfg.idle_timeout_ms, IDLE_TIMEOUT_MS);
    assert_eq!(cfg.scroll_damping, SCROLL_DAMPING);
}

#[test]
fn empty_options_decode_to_defaults() {
    let cfg: FxConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, FxConfig::default());
}
