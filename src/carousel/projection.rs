//! Render projection: maps navigator state onto a track translation.
//!
//! The track holds every card side by side, each `100/N` percent wide. It is
//! translated by `-(g * 100/N)%` plus the live offset in pixels. Settles are
//! animated with `cubic-bezier(0.25, 0.46, 0.45, 0.94)`; drags apply
//! instantly.

use std::time::{Duration, Instant};

use super::Snapshot;

/// Control points of the settle easing curve.
const EASE_P1: (f32, f32) = (0.25, 0.46);
const EASE_P2: (f32, f32) = (0.45, 0.94);

/// Track translation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransform {
    /// Translation as a percentage of the track width (zero or negative).
    pub percent: f64,
    pub offset_px: f32,
    /// Whether to animate towards this transform with the eased curve.
    pub eased: bool,
    pub total: usize,
}

impl TrackTransform {
    pub fn project(snapshot: &Snapshot) -> Self {
        let total = snapshot.total.max(1);
        let card_percent = 100.0 / total as f64;
        Self {
            percent: -(snapshot.global_index as f64 * card_percent),
            offset_px: snapshot.live_offset_px,
            eased: snapshot.is_settling(),
            total,
        }
    }

    /// Translation in pixels, given the width of one card (the viewport).
    pub fn pixels(&self, card_width: f32) -> f32 {
        let track_width = card_width * self.total as f32;
        (self.percent / 100.0) as f32 * track_width + self.offset_px
    }

    /// Track position measured in cards; fractional while dragging.
    pub fn card_position(&self, card_width: f32) -> f32 {
        if card_width <= 0.0 {
            return 0.0;
        }
        -self.pixels(card_width) / card_width
    }

    /// CSS `transform` value for a web track element.
    pub fn to_css(&self) -> String {
        if self.offset_px.abs() < f32::EPSILON {
            format!("translateX({}%)", self.percent)
        } else {
            format!("translateX(calc({}% + {}px))", self.percent, self.offset_px)
        }
    }

    /// CSS `transition` value matching [`Self::eased`].
    pub fn transition_css(&self, duration: Duration) -> String {
        if self.eased {
            format!(
                "transform {}s cubic-bezier({}, {}, {}, {})",
                duration.as_secs_f32(),
                EASE_P1.0,
                EASE_P1.1,
                EASE_P2.0,
                EASE_P2.1
            )
        } else {
            "none".to_string()
        }
    }
}

fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Settle easing: progress in `[0, 1]` for elapsed fraction `t`.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // x(s) is monotonic for these control points, so bisection converges.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if bezier(mid, EASE_P1.0, EASE_P2.0) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier((lo + hi) / 2.0, EASE_P1.1, EASE_P2.1)
}

/// Eased interpolation of the track position during a settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleCurve {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl SettleCurve {
    pub const fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn position_at(&self, now: Instant) -> f32 {
        if self.is_done(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease(t)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.duration.is_zero() || now >= self.start + self.duration
    }

    pub const fn target(&self) -> f32 {
        self.to
    }
}
