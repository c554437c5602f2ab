//! Navigation state machine.
//!
//! The navigator owns the single authoritative cursor (the global card index)
//! together with the live drag offset. Touch, keyboard and click navigation
//! all end up in [`Navigator::commit`], so every input path clamps and settles
//! the same way.

use std::{
    error::Error as StdError,
    fmt,
    result::Result as StdResult,
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};

use super::{
    gesture::{GestureEvent, GestureInterpreter, PointerPhase, PointerSample},
    index_mapper::IndexMapper,
    Snapshot,
};
use crate::{
    deck::{CategoryId, Deck, DeckError},
    error::Result,
};

/// Viewport width assumed until the render layer reports one.
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 320.0;

/// Tuning constants for gesture handling and settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorConfig {
    /// Movement (px) needed before a gesture picks an axis.
    pub axis_threshold_px: f32,
    /// Fraction of the viewport width a drag must exceed to commit.
    pub commit_fraction: f32,
    /// Offset multiplier when dragging past the first or last card.
    pub edge_damping: f32,
    pub settle_duration: Duration,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            axis_threshold_px: 8.0,
            commit_fraction: 0.2,
            edge_damping: 0.25,
            settle_duration: Duration::from_millis(300),
        }
    }
}

impl NavigatorConfig {
    pub fn validate(&self) -> StdResult<(), ConfigError> {
        if !(self.axis_threshold_px >= 0.0 && self.axis_threshold_px.is_finite()) {
            return Err(ConfigError::AxisThreshold(self.axis_threshold_px));
        }
        if !(self.commit_fraction > 0.0 && self.commit_fraction < 1.0) {
            return Err(ConfigError::CommitFraction(self.commit_fraction));
        }
        if !(self.edge_damping > 0.0 && self.edge_damping < 1.0) {
            return Err(ConfigError::EdgeDamping(self.edge_damping));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    AxisThreshold(f32),
    CommitFraction(f32),
    EdgeDamping(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisThreshold(v) => write!(f, "axis threshold must be a non-negative number, got {v}"),
            Self::CommitFraction(v) => write!(f, "commit fraction must be in (0, 1), got {v}"),
            Self::EdgeDamping(v) => write!(f, "edge damping must be in (0, 1), got {v}"),
        }
    }
}

impl StdError for ConfigError {}

/// Public tag of the navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Settling,
}

/// Scheduled end of a settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SettleTimer {
    deadline: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Dragging { axis_locked: bool },
    Settling(SettleTimer),
}

/// Keys with a navigation meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Space,
    Home,
    End,
}

/// Result of a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    Cancel,
}

/// What an input did to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dropped or irrelevant; nothing changed.
    Ignored,
    /// A drag is in progress; the live offset may have changed.
    Tracking,
    /// The position changed and a settle started.
    Committed { from: usize, to: usize },
    /// The offset snapped back without a position change.
    Cancelled,
    /// A settle finished.
    Settled,
}

/// Carousel navigation engine.
#[derive(Debug, Clone)]
pub struct Navigator {
    mapper: IndexMapper,
    interpreter: GestureInterpreter,
    config: NavigatorConfig,
    viewport_width: f32,
    global: usize,
    offset: f32,
    state: State,
}

impl Navigator {
    pub fn new(deck: &Deck, config: NavigatorConfig) -> Result<Self> {
        if deck.is_empty() {
            return Err(DeckError::Empty.into());
        }
        config.validate()?;
        Ok(Self {
            mapper: IndexMapper::new(deck),
            interpreter: GestureInterpreter::new(config.axis_threshold_px),
            config,
            viewport_width: FALLBACK_VIEWPORT_WIDTH,
            global: 0,
            offset: 0.0,
            state: State::Idle,
        })
    }

    pub const fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub const fn mapper(&self) -> &IndexMapper {
        &self.mapper
    }

    pub const fn global_index(&self) -> usize {
        self.global
    }

    pub const fn live_offset(&self) -> f32 {
        self.offset
    }

    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Dragging { .. } => Phase::Dragging,
            State::Settling(_) => Phase::Settling,
        }
    }

    pub const fn is_settling(&self) -> bool {
        matches!(self.state, State::Settling(_))
    }

    /// Width (px) of the card viewport, used for the commit threshold.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.viewport_width = width;
        }
    }

    pub fn commit_threshold(&self) -> f32 {
        self.viewport_width * self.config.commit_fraction
    }

    /// When the running settle ends, if one is running.
    pub const fn settle_deadline(&self) -> Option<Instant> {
        match self.state {
            State::Settling(timer) => Some(timer.deadline),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let position = self.mapper.category_relative_index(self.global);
        Snapshot {
            global_index: self.global,
            category: position.category,
            category_relative_index: position.relative_index,
            category_size: position.category_size,
            total: self.mapper.total(),
            phase: self.phase(),
            live_offset_px: self.offset,
            drag_axis_locked: matches!(self.state, State::Dragging { axis_locked: true }),
        }
    }

    // Pointer input

    pub fn pointer(&mut self, sample: PointerSample, now: Instant) -> Outcome {
        self.tick(now);
        match self.state {
            State::Settling(_) => {
                // The interaction started during a settle and was never tracked.
                self.interpreter.reset();
                debug!(?sample.phase, "Pointer sample dropped while settling");
                Outcome::Ignored
            }
            State::Idle | State::Dragging { .. } => self.track(sample, now),
        }
    }

    pub fn gesture_start(&mut self, x: f32, y: f32, now: Instant) -> Outcome {
        self.pointer(PointerSample::start(x, y), now)
    }

    pub fn gesture_move(&mut self, x: f32, y: f32, now: Instant) -> Outcome {
        self.pointer(PointerSample::moved(x, y), now)
    }

    pub fn gesture_end(&mut self, x: f32, y: f32, now: Instant) -> Outcome {
        self.pointer(PointerSample::end(x, y), now)
    }

    fn track(&mut self, sample: PointerSample, now: Instant) -> Outcome {
        if sample.phase == PointerPhase::Start {
            // A start while dragging means the previous release was lost.
            self.interpreter.begin(sample.x, sample.y);
            self.offset = 0.0;
            self.state = State::Dragging { axis_locked: false };
            return Outcome::Tracking;
        }

        match self.interpreter.feed(sample) {
            GestureEvent::None => Outcome::Ignored,
            GestureEvent::VerticalScroll => {
                self.state = State::Idle;
                self.offset = 0.0;
                Outcome::Ignored
            }
            GestureEvent::Drag { raw_offset } => {
                if !matches!(self.state, State::Dragging { .. }) {
                    return Outcome::Ignored;
                }
                self.state = State::Dragging { axis_locked: true };
                self.offset = self.damp(raw_offset);
                Outcome::Tracking
            }
            GestureEvent::Release { axis_committed, .. } => {
                let was_dragging = matches!(self.state, State::Dragging { .. });
                if !(was_dragging && axis_committed) {
                    self.state = State::Idle;
                    self.offset = 0.0;
                    return Outcome::Ignored;
                }
                self.release(now)
            }
        }
    }

    /// Apply rubber-band damping when dragging past either end of the deck.
    pub fn damp(&self, raw_offset: f32) -> f32 {
        let past_start = self.global == 0 && raw_offset > 0.0;
        let past_end = self.global == self.mapper.last() && raw_offset < 0.0;
        if past_start || past_end {
            raw_offset * self.config.edge_damping
        } else {
            raw_offset
        }
    }

    /// Classify a (damped) release offset.
    pub fn intent_for(&self, offset: f32) -> Intent {
        let threshold = self.commit_threshold();
        if offset < -threshold {
            Intent::Advance
        } else if offset > threshold {
            Intent::Retreat
        } else {
            Intent::Cancel
        }
    }

    fn release(&mut self, now: Instant) -> Outcome {
        let intent = self.intent_for(self.offset);
        debug!(offset = self.offset, threshold = self.commit_threshold(), ?intent, "Drag released");
        let target = self.target_for(intent);
        self.commit(target, now)
    }

    fn target_for(&self, intent: Intent) -> i64 {
        let current = as_target(self.global);
        match intent {
            Intent::Advance => current + 1,
            Intent::Retreat => current - 1,
            Intent::Cancel => current,
        }
    }

    // Programmatic navigation

    pub fn key(&mut self, key: NavKey, now: Instant) -> Outcome {
        let target = match key {
            NavKey::ArrowRight | NavKey::Space => self.target_for(Intent::Advance),
            NavKey::ArrowLeft => self.target_for(Intent::Retreat),
            NavKey::Home => 0,
            NavKey::End => as_target(self.mapper.last()),
        };
        self.navigate(target, now)
    }

    pub fn next(&mut self, now: Instant) -> Outcome {
        self.key(NavKey::ArrowRight, now)
    }

    pub fn previous(&mut self, now: Instant) -> Outcome {
        self.key(NavKey::ArrowLeft, now)
    }

    /// Jump to a global index; out-of-range targets are clamped.
    pub fn jump_to(&mut self, index: i64, now: Instant) -> Outcome {
        self.navigate(index, now)
    }

    pub fn jump_to_category(&mut self, category: CategoryId, now: Instant) -> Outcome {
        let Some(first) = self.mapper.global_index_of_first_in_category(category) else {
            warn!(?category, "Jump to a category without cards");
            return Outcome::Ignored;
        };
        self.navigate(as_target(first), now)
    }

    pub fn jump_to_category_relative(
        &mut self,
        category: CategoryId,
        relative: i64,
        now: Instant,
    ) -> Outcome {
        let Some(global) = self.mapper.global_for_category_relative(category, relative) else {
            warn!(?category, relative, "Jump to a category without cards");
            return Outcome::Ignored;
        };
        self.navigate(as_target(global), now)
    }

    fn navigate(&mut self, target: i64, now: Instant) -> Outcome {
        self.tick(now);
        if self.state != State::Idle {
            debug!(target, phase = ?self.phase(), "Navigation dropped while busy");
            return Outcome::Ignored;
        }
        // Idle has no offset to snap back, so a jump to the current card does nothing.
        if self.mapper.clamp_global(target) == self.global {
            return Outcome::Ignored;
        }
        self.commit(target, now)
    }

    /// Set the cursor to `target` (clamped), reset the offset and settle.
    /// Always enters `Settling`, even when the position does not change.
    fn commit(&mut self, target: i64, now: Instant) -> Outcome {
        let from = self.global;
        let to = self.mapper.clamp_global(target);

        self.global = to;
        self.offset = 0.0;
        self.state = State::Settling(SettleTimer {
            deadline: now + self.config.settle_duration,
        });

        if to == from {
            debug!(index = to, "Snapped back");
            Outcome::Cancelled
        } else {
            let position = self.mapper.category_relative_index(to);
            info!(
                from,
                to,
                relative = position.relative_index,
                category_size = position.category_size,
                "Navigated"
            );
            Outcome::Committed { from, to }
        }
    }

    // Settle timer

    /// Fire the settle timer if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Outcome {
        match self.state {
            State::Settling(timer) if now >= timer.deadline => {
                self.state = State::Idle;
                Outcome::Settled
            }
            _ => Outcome::Ignored,
        }
    }

    /// Abandon an in-progress drag without committing, e.g. when the pointer
    /// release can no longer be delivered.
    pub fn cancel_drag(&mut self) {
        self.interpreter.reset();
        if matches!(self.state, State::Dragging { .. }) {
            debug!(offset = self.offset, "Drag abandoned");
            self.state = State::Idle;
            self.offset = 0.0;
        }
    }

    /// Cancel a running settle, e.g. when the view is torn down.
    pub fn cancel_settle(&mut self) {
        if self.is_settling() {
            debug!("Settle cancelled");
            self.state = State::Idle;
        }
    }
}

fn as_target(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
