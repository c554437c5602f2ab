//! Status bar with keybindings and the navigator phase.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::carousel::Phase;

#[derive(Default)]
pub struct StatusBar {
    phase: Option<Phase>,
}

impl Component for StatusBar {
    type Input = Phase;

    fn update(&mut self, input: Self::Input) {
        self.phase = Some(input);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        const KEYBINDINGS: &[(&str, &str)] = &[
            ("?", "help"),
            ("←/→", "card"),
            ("[/]", "category"),
            ("t", "theme"),
            ("q", "quit"),
        ];

        let separator = Span::raw(" │ ");
        let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
            let prefix = (i > 0).then(|| separator.clone());
            prefix.into_iter().chain([
                Span::styled(*key, Style::new().fg(Color::Cyan)),
                Span::raw(format!(": {desc}")),
            ])
        });

        let phase_span = match self.phase {
            Some(Phase::Dragging) => Some(Span::styled(" [drag]", Style::new().fg(Color::Yellow))),
            Some(Phase::Settling) => Some(Span::styled(" [settle]", Style::new().fg(Color::Green))),
            Some(Phase::Idle) | None => None,
        };

        let spans: Vec<Span> = keybind_spans.chain(phase_span).collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
