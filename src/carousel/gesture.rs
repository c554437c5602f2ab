//! Classifies raw pointer samples into horizontal drags or vertical scrolls.
//!
//! The interpreter only knows about the active interaction. Edge damping and
//! the commit decision need the carousel position and live in the navigator.

use tracing::debug;

/// Phase of a raw pointer/touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// A raw pointer or touch sample, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub const fn start(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Start,
        }
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Move,
        }
    }

    pub const fn end(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::End,
        }
    }
}

/// Axis decision for the active interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// What the interpreter reports for a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Nothing to report (jitter below the threshold, or an ignored sample).
    None,
    /// The interaction turned out to be a vertical scroll.
    VerticalScroll,
    /// Horizontal drag with the raw offset from the start point.
    Drag { raw_offset: f32 },
    /// The interaction ended.
    Release { raw_offset: f32, axis_committed: bool },
}

#[derive(Debug, Clone, Copy)]
struct Track {
    start_x: f32,
    start_y: f32,
    axis: Axis,
    last_dx: f32,
}

/// Per-interaction gesture classifier.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    axis_threshold: f32,
    track: Option<Track>,
}

impl GestureInterpreter {
    pub const fn new(axis_threshold: f32) -> Self {
        Self {
            axis_threshold,
            track: None,
        }
    }

    pub fn feed(&mut self, sample: PointerSample) -> GestureEvent {
        match sample.phase {
            PointerPhase::Start => {
                self.begin(sample.x, sample.y);
                GestureEvent::None
            }
            PointerPhase::Move => self.update(sample.x, sample.y),
            PointerPhase::End => self.end(),
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.track = Some(Track {
            start_x: x,
            start_y: y,
            axis: Axis::Undecided,
            last_dx: 0.0,
        });
    }

    pub fn update(&mut self, x: f32, y: f32) -> GestureEvent {
        let Some(track) = self.track.as_mut() else {
            return GestureEvent::None;
        };
        let dx = x - track.start_x;
        let dy = y - track.start_y;

        match track.axis {
            Axis::Undecided => {
                if dx.abs().max(dy.abs()) <= self.axis_threshold {
                    return GestureEvent::None;
                }
                if dx.abs() > dy.abs() {
                    debug!(dx, dy, "Axis locked horizontal");
                    track.axis = Axis::Horizontal;
                    track.last_dx = dx;
                    GestureEvent::Drag { raw_offset: dx }
                } else {
                    debug!(dx, dy, "Axis locked vertical");
                    track.axis = Axis::Vertical;
                    GestureEvent::VerticalScroll
                }
            }
            Axis::Horizontal => {
                track.last_dx = dx;
                GestureEvent::Drag { raw_offset: dx }
            }
            Axis::Vertical => GestureEvent::None,
        }
    }

    pub fn end(&mut self) -> GestureEvent {
        let Some(track) = self.track.take() else {
            return GestureEvent::None;
        };
        let axis_committed = track.axis == Axis::Horizontal;
        GestureEvent::Release {
            raw_offset: if axis_committed { track.last_dx } else { 0.0 },
            axis_committed,
        }
    }

    /// Drop the active interaction without reporting a release.
    pub fn reset(&mut self) {
        self.track = None;
    }

    pub fn is_active(&self) -> bool {
        self.track.is_some()
    }

    pub fn axis(&self) -> Axis {
        self.track.map_or(Axis::Undecided, |t| t.axis)
    }

    /// Whether the host should suppress its default vertical scrolling.
    pub fn suppresses_default_scroll(&self) -> bool {
        self.axis() == Axis::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_below_threshold_is_ignored() {
        let mut g = GestureInterpreter::new(8.0);
        g.begin(100.0, 100.0);
        assert_eq!(g.update(105.0, 103.0), GestureEvent::None);
        assert_eq!(g.update(92.0, 100.0), GestureEvent::None);
        assert_eq!(g.axis(), Axis::Undecided);
    }

    #[test]
    fn test_horizontal_lock_emits_raw_offset() {
        let mut g = GestureInterpreter::new(8.0);
        g.begin(100.0, 100.0);
        assert_eq!(g.update(80.0, 102.0), GestureEvent::Drag { raw_offset: -20.0 });
        assert!(g.suppresses_default_scroll());
        assert_eq!(g.update(60.0, 104.0), GestureEvent::Drag { raw_offset: -40.0 });
        assert_eq!(
            g.end(),
            GestureEvent::Release {
                raw_offset: -40.0,
                axis_committed: true
            }
        );
        assert!(!g.is_active());
    }

    #[test]
    fn test_vertical_scroll_reports_once_then_nothing() {
        let mut g = GestureInterpreter::new(8.0);
        g.begin(0.0, 0.0);
        assert_eq!(g.update(2.0, 20.0), GestureEvent::VerticalScroll);
        assert_eq!(g.update(60.0, 25.0), GestureEvent::None);
        assert_eq!(
            g.end(),
            GestureEvent::Release {
                raw_offset: 0.0,
                axis_committed: false
            }
        );
    }

    #[test]
    fn test_horizontal_lock_survives_vertical_samples() {
        let mut g = GestureInterpreter::new(8.0);
        g.begin(0.0, 0.0);
        g.update(-12.0, 0.0);
        assert_eq!(g.update(-14.0, 80.0), GestureEvent::Drag { raw_offset: -14.0 });
        assert_eq!(g.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_diagonal_tie_resolves_vertical() {
        let mut g = GestureInterpreter::new(8.0);
        g.begin(0.0, 0.0);
        assert_eq!(g.update(10.0, 10.0), GestureEvent::VerticalScroll);
    }

    #[test]
    fn test_samples_without_start_are_ignored() {
        let mut g = GestureInterpreter::new(8.0);
        assert_eq!(g.feed(PointerSample::moved(50.0, 0.0)), GestureEvent::None);
        assert_eq!(g.feed(PointerSample::end(50.0, 0.0)), GestureEvent::None);
    }
}
