//! Carousel navigation engine.
//!
//! Raw pointer samples go through the [`GestureInterpreter`], the
//! [`Navigator`] turns them (and keyboard/click commands) into position
//! changes, and the [`IndexMapper`] derives every category-relative coordinate
//! from the single global index.

pub mod gesture;
pub mod index_mapper;
pub mod navigator;
pub mod projection;

pub use gesture::{Axis, GestureEvent, GestureInterpreter, PointerPhase, PointerSample};
pub use index_mapper::{CategoryPosition, IndexMapper};
pub use navigator::{
    ConfigError, Intent, NavKey, Navigator, NavigatorConfig, Outcome, Phase,
    FALLBACK_VIEWPORT_WIDTH,
};
pub use projection::{ease, SettleCurve, TrackTransform};

use crate::deck::CategoryId;

/// Everything the render layer needs after a transition.
///
/// The category fields are derived from `global_index`; there is no way to
/// set them independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub global_index: usize,
    pub category: CategoryId,
    pub category_relative_index: usize,
    pub category_size: usize,
    pub total: usize,
    pub phase: Phase,
    pub live_offset_px: f32,
    pub drag_axis_locked: bool,
}

impl Snapshot {
    /// Whether the render layer should animate with an eased transition.
    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }
}
