//! Pinch and double-tap zoom suppression rules.

/// More than one finger down is a pinch.
#[inline]
pub fn is_multi_touch(touches: u32) -> bool {
    touches > 1
}

/// Remembers the last `touchend` to spot double taps.
#[derive(Clone, Copy, Debug)]
pub struct DoubleTapGuard {
    window_ms: f64,
    last_end: Option<f64>,
}

impl DoubleTapGuard {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_end: None,
        }
    }

    /// Record a `touchend` at `now_ms`; `true` when it completes a double
    /// tap and should be prevented.
    pub fn touch_end(&mut self, now_ms: f64) -> bool {
        let block = matches!(self.last_end, Some(last) if now_ms - last <= self.window_ms);
        self.last_end = Some(now_ms);
        block
    }
}
