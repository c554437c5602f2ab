//! Bottom bar: one dot per card of the active category, a counter, and the
//! version label.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ClickRegion, ClickTarget, Component, Theme};
use crate::deck::CategoryId;

pub struct ProgressBarInput {
    pub category: CategoryId,
    pub category_size: usize,
    pub relative_index: usize,
    pub accent: Color,
    pub theme: Theme,
}

#[derive(Default)]
pub struct ProgressBar {
    category: CategoryId,
    category_size: usize,
    relative_index: usize,
    accent: Option<Color>,
    theme: Theme,
    click_regions: Vec<ClickRegion>,
}

impl Component for ProgressBar {
    type Input = ProgressBarInput;

    fn update(&mut self, input: Self::Input) {
        self.category = input.category;
        self.category_size = input.category_size;
        self.relative_index = input.relative_index;
        self.accent = Some(input.accent);
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.click_regions.clear();

        let counter = format!(
            "{}/{}",
            self.relative_index + 1,
            self.category_size
        );
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        let [dots_area, counter_area, version_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(counter.len() + 2).unwrap_or(u16::MAX)),
            Constraint::Length(u16::try_from(version.len() + 1).unwrap_or(u16::MAX)),
        ])
        .areas(area);

        let active = Style::new().fg(self.accent.unwrap_or(Color::Cyan));
        let mut spans = Vec::new();
        for i in 0..self.category_size {
            // Each dot is one cell followed by a space.
            let Ok(x) = u16::try_from(i * 2) else { break };
            if x >= dots_area.width {
                break;
            }
            let (symbol, style) = if i == self.relative_index {
                ("●", active)
            } else {
                ("○", self.theme.dim())
            };
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
            self.click_regions.push(ClickRegion {
                area: Rect::new(dots_area.x + x, dots_area.y, 1, 1),
                target: ClickTarget::Dot {
                    category: self.category,
                    relative: i,
                },
            });
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), dots_area);
        frame.render_widget(
            Paragraph::new(Span::styled(counter, self.theme.base())),
            counter_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(version, self.theme.dim())),
            version_area,
        );
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }
}
