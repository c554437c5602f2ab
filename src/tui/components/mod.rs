//! Component-based UI architecture.
//!
//! Each component owns the data it draws and records click regions while
//! rendering, so hit-testing always matches what is on screen.

mod card_track;
mod category_strip;
mod header;
mod help_menu;
mod progress_bar;
mod status_bar;
mod theme;

pub use card_track::{CardTrack, CardTrackInput, CardView};
pub use category_strip::{CategoryStrip, CategoryStripInput};
pub use header::{Header, HeaderInput};
pub use help_menu::HelpMenu;
pub use progress_bar::{ProgressBar, ProgressBarInput};
use ratatui::{layout::Rect, Frame};
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeMode};

use crate::deck::CategoryId;

/// What a click on a region asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Jump to the first card of a category (category pill).
    Category(CategoryId),
    /// Jump to a card of a category by its position in that category
    /// (progress dot).
    Dot { category: CategoryId, relative: usize },
}

/// A clickable region mapped to a target.
#[derive(Debug, Clone)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

impl ClickRegion {
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        self.area.x <= x
            && x < self.area.x + self.area.width
            && self.area.y <= y
            && y < self.area.y + self.area.height
    }
}

/// Find the click target under (x, y).
pub fn hit_test(regions: &[ClickRegion], x: u16, y: u16) -> Option<ClickTarget> {
    regions.iter().find(|r| r.contains(x, y)).map(|r| r.target)
}

/// A UI component with co-located state and rendering.
pub trait Component {
    /// Data the component is refreshed with before each frame.
    type Input;

    /// Update state with new input data.
    fn update(&mut self, input: Self::Input);

    /// Render the component and compute click regions.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Click regions computed during the last render.
    fn click_regions(&self) -> &[ClickRegion] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_finds_region() {
        let regions = vec![
            ClickRegion {
                area: Rect::new(0, 0, 5, 1),
                target: ClickTarget::Category(CategoryId(0)),
            },
            ClickRegion {
                area: Rect::new(6, 0, 5, 1),
                target: ClickTarget::Category(CategoryId(1)),
            },
        ];
        assert_eq!(hit_test(&regions, 7, 0), Some(ClickTarget::Category(CategoryId(1))));
        assert_eq!(hit_test(&regions, 5, 0), None);
        assert_eq!(hit_test(&regions, 0, 1), None);
    }
}
