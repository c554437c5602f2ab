//! HelpMenu component - overlay showing keyboard and mouse controls.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::Component;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("←/h", "previous card"),
    ("→/l/Space", "next card"),
    ("Home/End", "first/last card"),
    ("[/]", "previous/next category"),
    ("drag", "swipe between cards"),
    ("click", "pill or dot to jump"),
    ("t", "toggle light/dark"),
    ("?", "close help"),
    ("q", "quit"),
];

/// Help menu popup.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub const fn hide(&mut self) {
        self.visible = false;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for HelpMenu {
    type Input = ();

    fn update(&mut self, (): Self::Input) {}

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let width = 38u16.min(area.width);
        let height = (KEYBINDINGS.len() as u16 + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(Color::Cyan));

        let key_style = Style::new().fg(Color::Cyan);
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), key_style),
                    Span::raw(format!("  {desc}")),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
