// Host-side tests for scroll-derived values and the smoothed scroll state.

use page_fx::core::scroll::*;
use page_fx::core::{FxConfig, MotionPolicy};

fn sample(scroll_y: f64) -> ScrollSample {
    ScrollSample {
        scroll_y,
        viewport_h: 800.0,
        document_h: 2800.0,
    }
}

#[test]
fn targets_at_top_of_page() {
    let t = scroll_targets(sample(0.0), 0.0, false);
    assert_eq!(t.progress, 0.0);
    assert_eq!(t.blur_px, 0.0);
    assert_eq!(t.hero_y_px, 0.0);
    assert_eq!(t.hero_skew_deg, -6.0);
}

#[test]
fn targets_mid_page() {
    let t = scroll_targets(sample(1000.0), 910.0, false);
    assert_eq!(t.progress, 0.5);
    assert_eq!(t.blur_px, 5.0);
    assert_eq!(t.hero_y_px, 27.5);
    // -6 + 1.25 * 6 = 1.5, clamped to 1
    assert_eq!(t.hero_skew_deg, 1.0);
}

#[test]
fn blur_is_capped_and_calm_disables_it() {
    assert_eq!(scroll_targets(sample(1000.0), 0.0, false).blur_px, 10.0);
    assert_eq!(scroll_targets(sample(1000.0), 0.0, true).blur_px, 0.0);
}

#[test]
fn hero_drift_stops_after_limit() {
    let far = scroll_targets(sample(2000.0), 2000.0, false);
    assert_eq!(far.hero_y_px, 1.4 * 22.0);
}

#[test]
fn short_document_does_not_divide_by_zero() {
    let s = ScrollSample {
        scroll_y: 0.0,
        viewport_h: 800.0,
        document_h: 600.0,
    };
    let t = scroll_targets(s, 0.0, false);
    assert!(t.progress.is_finite());
    let none = ScrollSample::default();
    let t = scroll_targets(none, 0.0, false);
    assert!(t.hero_y_px.is_finite());
}

#[test]
fn header_hides_going_down_and_returns_going_up() {
    assert_eq!(header_visibility(0.0, -10.0), HeaderVisibility::Show);
    assert_eq!(header_visibility(0.0, 0.0), HeaderVisibility::Show);
    assert_eq!(header_visibility(300.0, 12.0), HeaderVisibility::Hide);
    assert_eq!(header_visibility(300.0, -12.0), HeaderVisibility::Show);
    assert_eq!(header_visibility(300.0, 0.0), HeaderVisibility::Keep);
}

#[test]
fn smoothed_state_settles_on_targets_and_stops() {
    let cfg = FxConfig::default();
    let mut state = ScrollState::new(0.0, &cfg, MotionPolicy::Animate);

    let first = state.advance(sample(1000.0), false);
    assert!(first.animating);
    assert_eq!(first.header, HeaderVisibility::Hide);
    assert!(first.values.progress > 0.0 && first.values.progress < 0.5);

    let mut frames = 1;
    loop {
        let out = state.advance(sample(1000.0), false);
        assert_eq!(out.header, HeaderVisibility::Keep);
        frames += 1;
        if !out.animating {
            break;
        }
        assert!(frames < 1000, "scroll state never settled");
    }
    let v = state.values();
    assert_eq!(v.progress, 0.5);
    assert_eq!(v.hero_y_px, 27.5);
    assert_eq!(v.hero_skew_deg, 1.0);
    // no movement since the first frame, so the blur has decayed away
    assert_eq!(v.blur_px, 0.0);
}

#[test]
fn reduced_motion_applies_targets_in_one_frame() {
    let cfg = FxConfig::default();
    let mut state = ScrollState::new(0.0, &cfg, MotionPolicy::Immediate);
    let out = state.advance(sample(1000.0), true);
    assert!(!out.animating);
    assert_eq!(out.values.progress, 0.5);
    assert_eq!(out.values.hero_y_px, 27.5);
    assert_eq!(out.values.blur_px, 0.0);
}
