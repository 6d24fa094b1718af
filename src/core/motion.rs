//! Geometry for the pointer and scroll driven effects.
//!
//! Everything here is plain arithmetic over rectangles and client
//! coordinates; the event wiring reads those from the DOM and writes the
//! results back as CSS custom properties.

use super::constants::*;
use glam::DVec2;

/// Client-space rectangle (a `DOMRect` without the browser).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Offset of `point` from the centre in units of the element size
    /// (about [-0.5, 0.5] while inside). Zero for an empty rectangle.
    pub fn centered_ratio(&self, point: DVec2) -> DVec2 {
        if !self.has_area() {
            return DVec2::ZERO;
        }
        (point - self.center()) / DVec2::new(self.width, self.height)
    }

    /// Position of `point` as a percentage of the element size.
    /// The centre (50%, 50%) for an empty rectangle.
    pub fn percent(&self, point: DVec2) -> DVec2 {
        if !self.has_area() {
            return DVec2::splat(50.0);
        }
        (point - DVec2::new(self.left, self.top)) / DVec2::new(self.width, self.height) * 100.0
    }
}

#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Scroll destination for an anchor target whose client top is `top`.
#[inline]
pub fn anchor_destination(top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (top + scroll_y - header_offset).max(0.0)
}

/// An in-flight smooth scroll toward a fixed `scrollY`.
#[derive(Clone, Copy, Debug)]
pub struct AnchorGlide {
    start_y: f64,
    delta: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl AnchorGlide {
    pub fn new(start_y: f64, target_y: f64, duration_ms: f64) -> Self {
        Self {
            start_y,
            delta: target_y - start_y,
            duration_ms,
            started_at: None,
        }
    }

    pub fn target_y(&self) -> f64 {
        self.start_y + self.delta
    }

    /// Scroll position for the frame at `now_ms`; the first call pins the
    /// start time. The flag is `true` once the glide has arrived.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        let t = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        (self.start_y + self.delta * ease_out_expo(t), t >= 1.0)
    }
}

/// Normalized distance of an element's centre from the viewport centre,
/// in viewport heights.
#[inline]
pub fn viewport_distance(bounds: &Bounds, viewport_h: f64) -> f64 {
    if viewport_h <= 0.0 {
        return 0.0;
    }
    let center = bounds.top + bounds.height / 2.0;
    (center - viewport_h / 2.0) / viewport_h
}

/// Depth offset in px for parallax `factor` at distance `dist`.
#[inline]
pub fn parallax_offset(dist: f64, factor: f64, gain: f64, limit: f64) -> f64 {
    (-dist * factor * gain).clamp(-limit, limit)
}

/// Parse a `data-parallax` value; missing, unparsable or non-positive means
/// the element is not animated.
pub fn parse_parallax_factor(raw: Option<&str>) -> Option<f64> {
    let factor: f64 = raw?.trim().parse().ok()?;
    (factor.is_finite() && factor > 0.0).then_some(factor)
}

/// Pointer position relative to the viewport centre, in viewport units.
#[inline]
pub fn viewport_pointer(client: DVec2, viewport: DVec2) -> DVec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return DVec2::ZERO;
    }
    client / viewport - 0.5
}

/// Translation in px of a background layer for a normalized pointer.
#[inline]
pub fn layer_shift(pointer: DVec2, gain: [f64; 2]) -> DVec2 {
    pointer * DVec2::from_array(gain)
}

/// Card tilt `(rx, ry)` in degrees for a centred pointer ratio.
#[inline]
pub fn card_tilt(ratio: DVec2) -> (f64, f64) {
    let ry = (ratio.x * CARD_TILT_Y_DEG).clamp(-CARD_TILT_Y_DEG, CARD_TILT_Y_DEG);
    let rx = (ratio.y * -CARD_TILT_X_DEG).clamp(-CARD_TILT_X_DEG, CARD_TILT_X_DEG);
    (rx, ry)
}

/// Magnetic button translation in px for a damped pointer ratio.
#[inline]
pub fn magnet_offset(ratio: DVec2) -> DVec2 {
    ratio * DVec2::from_array(MAGNET_GAIN_PX)
}

/// Hero tilt `(rx, ry)` in degrees for a damped pointer ratio.
#[inline]
pub fn hero_tilt(ratio: DVec2) -> (f64, f64) {
    let rx = (ratio.y * -TILT_X_LIMIT_DEG).clamp(-TILT_X_LIMIT_DEG, TILT_X_LIMIT_DEG);
    let ry = (ratio.x * TILT_Y_LIMIT_DEG).clamp(-TILT_Y_LIMIT_DEG, TILT_Y_LIMIT_DEG);
    (rx, ry)
}

pub fn hero_tilt_transform(ratio: DVec2) -> String {
    let (rx, ry) = hero_tilt(ratio);
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        TILT_PERSPECTIVE_PX, rx, ry
    )
}

/// `"12.34px"`
#[inline]
pub fn px(value: f64) -> String {
    format!("{:.2}px", value)
}

/// `"12.34deg"`
#[inline]
pub fn deg(value: f64) -> String {
    format!("{:.2}deg", value)
}

/// `"12.34%"`
#[inline]
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
