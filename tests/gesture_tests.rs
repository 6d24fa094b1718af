// Host-side tests for zoom-gesture detection.

use page_fx::core::constants::DOUBLE_TAP_WINDOW_MS;
use page_fx::core::gesture::{is_multi_touch, DoubleTapGuard};

#[test]
fn pinch_needs_two_fingers() {
    assert!(!is_multi_touch(0));
    assert!(!is_multi_touch(1));
    assert!(is_multi_touch(2));
    assert!(is_multi_touch(5));
}

#[test]
fn second_tap_inside_window_is_blocked() {
    let mut guard = DoubleTapGuard::new(DOUBLE_TAP_WINDOW_MS);
    assert!(!guard.touch_end(1000.0));
    assert!(guard.touch_end(1200.0));
    // measured from the previous touchend, not the first
    assert!(!guard.touch_end(1600.0));
    assert!(guard.touch_end(1940.0));
}

#[test]
fn first_tap_is_never_blocked() {
    let mut guard = DoubleTapGuard::new(DOUBLE_TAP_WINDOW_MS);
    assert!(!guard.touch_end(0.0));
}
