// Host-side tests for the damped-value primitive behind every animation loop.

use glam::DVec2;
use page_fx::core::smoothing::{clamp_damping, Damped, MotionPolicy};

#[test]
fn every_tick_moves_closer_to_the_target() {
    for &k in &[0.01, 0.08, 0.14, 0.2, 0.5, 0.99, 1.0] {
        let mut v = Damped::new(0.0_f64, k, 1e-9);
        v.set_target(100.0);
        let mut prev_gap = v.gap();
        for _ in 0..500 {
            v.tick();
            let gap = v.gap();
            assert!(gap <= prev_gap, "k={} gap grew {} -> {}", k, prev_gap, gap);
            prev_gap = gap;
        }
    }
}

#[test]
fn vector_ticks_converge_on_both_axes() {
    let mut v = Damped::new(DVec2::ZERO, 0.14, 0.002);
    v.set_target(DVec2::new(0.4, -0.3));
    let mut prev_gap = v.gap();
    let mut frames = 0;
    while v.tick() {
        assert!(v.gap() <= prev_gap);
        prev_gap = v.gap();
        frames += 1;
        assert!(frames < 1000, "never settled");
    }
    assert_eq!(v.current(), DVec2::new(0.4, -0.3));
}

#[test]
fn settles_exactly_on_target_and_stops() {
    let mut v = Damped::new(0.0_f64, 0.2, 0.002);
    v.set_target(1.0);
    assert!(v.tick());
    let mut frames = 1;
    while v.tick() {
        frames += 1;
    }
    assert!(frames > 5);
    assert_eq!(v.current(), 1.0);
    assert!(v.is_settled());
    // idle: no more frames requested
    assert!(!v.tick());
}

#[test]
fn immediate_policy_has_no_transition_frames() {
    let mut v = Damped::new(0.0_f64, 0.08, 0.002).with_policy(MotionPolicy::Immediate);
    v.set_target(42.0);
    assert!(!v.tick());
    assert_eq!(v.current(), 42.0);
    assert_eq!(MotionPolicy::for_reduced_motion(true), MotionPolicy::Immediate);
    assert_eq!(MotionPolicy::for_reduced_motion(false), MotionPolicy::Animate);
}

#[test]
fn full_damping_reaches_target_in_one_tick() {
    let mut v = Damped::new(5.0_f64, 1.0, 0.002);
    v.set_target(-3.0);
    assert!(!v.tick());
    assert_eq!(v.current(), -3.0);
}

#[test]
fn snap_moves_value_and_target() {
    let mut v = Damped::new(DVec2::ZERO, 0.14, 0.002);
    v.set_target(DVec2::new(0.5, 0.5));
    v.tick();
    v.snap_to(DVec2::ZERO);
    assert_eq!(v.current(), DVec2::ZERO);
    assert_eq!(v.target(), DVec2::ZERO);
    assert!(!v.tick());
}

#[test]
fn damping_factor_is_clamped() {
    assert_eq!(clamp_damping(0.0), 0.01);
    assert_eq!(clamp_damping(-1.0), 0.01);
    assert_eq!(clamp_damping(f64::NAN), 0.01);
    assert_eq!(clamp_damping(2.5), 1.0);
    assert_eq!(clamp_damping(0.14), 0.14);
}
