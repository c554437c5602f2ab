//! Header component with the deck title and theme indicator.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Theme};

pub struct HeaderInput {
    pub title: String,
    pub theme: Theme,
}

/// Top bar showing the deck title.
#[derive(Default)]
pub struct Header {
    title: String,
    theme: Theme,
}

impl Component for Header {
    type Input = HeaderInput;

    fn update(&mut self, input: Self::Input) {
        self.title = input.title;
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            self.theme.base().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);

        let mode = Paragraph::new(Line::from(vec![
            Span::styled("t", self.theme.key()),
            Span::styled(format!(" {} ", self.theme.mode.label()), self.theme.dim()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(mode, area);
    }
}
