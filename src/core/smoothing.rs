//! Exponential smoothing ("lerp") toward a target.
//!
//! Every animated channel in the page effects is a [`Damped`] value: the
//! event handlers move the target, and a frame loop calls [`Damped::tick`]
//! until the value has settled. Settling is the only stop condition for the
//! loops, so an idle page schedules no frames.

use glam::DVec2;

/// A value that can be blended toward a target.
pub trait Blend: Copy {
    /// `self + (target - self) * k`
    fn blend(self, target: Self, k: f64) -> Self;
    /// Largest per-axis distance to `target`.
    fn gap(self, target: Self) -> f64;
}

impl Blend for f64 {
    #[inline]
    fn blend(self, target: Self, k: f64) -> Self {
        self + (target - self) * k
    }

    #[inline]
    fn gap(self, target: Self) -> f64 {
        (target - self).abs()
    }
}

impl Blend for DVec2 {
    #[inline]
    fn blend(self, target: Self, k: f64) -> Self {
        self + (target - self) * k
    }

    #[inline]
    fn gap(self, target: Self) -> f64 {
        (target - self).abs().max_element()
    }
}

/// How a [`Damped`] value reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPolicy {
    /// Close a fixed fraction of the gap every frame.
    #[default]
    Animate,
    /// Jump straight to the target (reduced motion).
    Immediate,
}

impl MotionPolicy {
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced {
            MotionPolicy::Immediate
        } else {
            MotionPolicy::Animate
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Damped<T: Blend> {
    current: T,
    target: T,
    k: f64,
    epsilon: f64,
    policy: MotionPolicy,
}

impl<T: Blend> Damped<T> {
    /// `k` is clamped into (0, 1]; a non-positive epsilon falls back to `f64::EPSILON`.
    pub fn new(initial: T, k: f64, epsilon: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            k: clamp_damping(k),
            epsilon: if epsilon > 0.0 { epsilon } else { f64::EPSILON },
            policy: MotionPolicy::Animate,
        }
    }

    pub fn with_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Gap between the current value and the target.
    #[inline]
    pub fn gap(&self) -> f64 {
        self.current.gap(self.target)
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.gap() <= self.epsilon
    }

    /// Advance one frame. Returns `true` while another frame is needed.
    ///
    /// Within epsilon the value lands exactly on the target, so outputs
    /// written from a settled value are stable.
    pub fn tick(&mut self) -> bool {
        if self.policy == MotionPolicy::Immediate {
            self.current = self.target;
            return false;
        }
        self.current = self.current.blend(self.target, self.k);
        if self.is_settled() {
            self.current = self.target;
            return false;
        }
        true
    }

    /// Move both the value and the target to `value` with no transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }
}

/// Clamp a damping factor into (0, 1].
pub fn clamp_damping(k: f64) -> f64 {
    if k.is_nan() || k <= 0.0 {
        // smallest useful rate; a zero rate would never converge
        0.01
    } else {
        k.min(1.0)
    }
}
