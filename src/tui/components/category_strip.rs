//! Category pill strip; the active pill is kept centred in view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ClickRegion, ClickTarget, Component, Theme};
use crate::deck::CategoryId;

const PILL_GAP: u16 = 1;

pub struct CategoryStripInput {
    /// (name, accent) per category, in vocabulary order.
    pub pills: Vec<(String, Color)>,
    pub active: CategoryId,
    pub theme: Theme,
}

#[derive(Default)]
pub struct CategoryStrip {
    pills: Vec<(String, Color)>,
    active: usize,
    theme: Theme,
    click_regions: Vec<ClickRegion>,
}

fn pill_width(name: &str) -> u16 {
    u16::try_from(name.chars().count() + 2).unwrap_or(u16::MAX)
}

/// Horizontal scroll that centres pill `active` in a strip `view_width` wide.
///
/// `widths` are pill widths without gaps. The result never scrolls past
/// either end of the strip.
pub fn centred_scroll(widths: &[u16], active: usize, view_width: u16) -> u16 {
    let total: u16 = widths
        .iter()
        .map(|w| w.saturating_add(PILL_GAP))
        .fold(0, u16::saturating_add)
        .saturating_sub(PILL_GAP);
    if total <= view_width || widths.is_empty() {
        return 0;
    }
    let active = active.min(widths.len() - 1);
    let start: u16 = widths[..active]
        .iter()
        .map(|w| w.saturating_add(PILL_GAP))
        .fold(0, u16::saturating_add);
    let centre = start.saturating_add(widths[active] / 2);
    centre
        .saturating_sub(view_width / 2)
        .min(total - view_width)
}

impl Component for CategoryStrip {
    type Input = CategoryStripInput;

    fn update(&mut self, input: Self::Input) {
        self.pills = input.pills;
        self.active = input.active.0;
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.click_regions.clear();

        let widths: Vec<u16> = self.pills.iter().map(|(name, _)| pill_width(name)).collect();
        let scroll = centred_scroll(&widths, self.active, area.width);

        let mut spans = Vec::new();
        let mut x: u16 = 0;
        for (i, ((name, accent), width)) in self.pills.iter().zip(&widths).enumerate() {
            let style = if i == self.active {
                Style::new()
                    .fg(Color::Black)
                    .bg(*accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.dim()
            };
            spans.push(Span::styled(format!(" {name} "), style));
            spans.push(Span::raw(" ".repeat(PILL_GAP as usize)));

            // Record the visible part of the pill for hit-testing.
            let left = x.max(scroll);
            let right = x.saturating_add(*width).min(scroll.saturating_add(area.width));
            if left < right {
                self.click_regions.push(ClickRegion {
                    area: Rect::new(area.x + (left - scroll), area.y, right - left, 1),
                    target: ClickTarget::Category(CategoryId(i)),
                });
            }
            x = x.saturating_add(*width).saturating_add(PILL_GAP);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).scroll((0, scroll)), area);
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_when_strip_fits() {
        assert_eq!(centred_scroll(&[5, 5, 5], 2, 40), 0);
    }

    #[test]
    fn test_active_pill_is_centred() {
        // Pills start at 0, 11, 22, 33; each 10 wide. Total 43.
        let widths = [10, 10, 10, 10];
        assert_eq!(centred_scroll(&widths, 0, 20), 0);
        assert_eq!(centred_scroll(&widths, 2, 20), 17);
        // Clamped so the last pill ends at the right edge.
        assert_eq!(centred_scroll(&widths, 3, 20), 23);
    }
}
