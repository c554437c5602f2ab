//! The card track: every card laid side by side, viewed through one card-wide
//! window that follows the (possibly fractional) track position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap},
    Frame,
};

use super::{Component, Theme};
use crate::deck::Deck;

/// Display data for one card, prepared once from the deck.
#[derive(Debug, Clone)]
pub struct CardView {
    pub category: String,
    pub accent: Color,
    pub name: String,
    pub explanation: String,
    pub when_to_use: Option<String>,
    pub example: Option<String>,
    /// Category description, shown on the first card of each category run.
    pub description: Option<String>,
}

impl CardView {
    pub fn from_deck(deck: &Deck) -> Vec<Self> {
        deck.cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let (category, index) = deck
                    .category_of(i)
                    .and_then(|id| deck.category(id).map(|c| (c, id.0)))
                    .map_or((None, 0), |(c, index)| (Some(c), index));
                Self {
                    category: card.category.clone(),
                    accent: category.map_or(Color::Cyan, |c| Theme::accent(c, index)),
                    name: card.name.clone(),
                    explanation: card.explanation.clone(),
                    when_to_use: card.when_to_use.clone(),
                    example: card.example.clone(),
                    description: deck
                        .is_first_in_category(i)
                        .then(|| category.and_then(|c| c.description.clone()))
                        .flatten(),
                }
            })
            .collect()
    }
}

pub struct CardTrackInput {
    /// Track position in cards; `2.5` is halfway between cards 2 and 3.
    pub position: f32,
    pub current: usize,
    pub theme: Theme,
}

pub struct CardTrack {
    cards: Vec<CardView>,
    position: f32,
    current: usize,
    theme: Theme,
}

impl CardTrack {
    pub fn new(cards: Vec<CardView>) -> Self {
        Self {
            cards,
            position: 0.0,
            current: 0,
            theme: Theme::default(),
        }
    }
}

fn card_paragraph(card: &CardView, theme: Theme, active: bool) -> Paragraph<'_> {
    let heading = theme.heading();
    let mut lines = Vec::new();

    if let Some(description) = &card.description {
        lines.push(Line::from(Span::styled(
            description.as_str(),
            theme.dim().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        format!(" {} ", card.category),
        Style::new().fg(Color::Black).bg(card.accent),
    )));
    lines.push(Line::from(Span::styled(
        card.name.as_str(),
        Style::new().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(card.explanation.as_str()));

    for (title, body) in [
        ("WHEN TO USE", card.when_to_use.as_deref()),
        ("EXAMPLE", card.example.as_deref()),
    ] {
        let Some(body) = body else { continue };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(title, heading)));
        lines.push(Line::from(body));
    }

    let mut style = theme.base().bg(theme.card_background(card.accent));
    if !active {
        style = style.add_modifier(Modifier::DIM);
    }
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(card.accent))
        .padding(Padding::horizontal(1))
        .style(style);

    Paragraph::new(lines)
        .block(block)
        .style(style)
        .wrap(Wrap { trim: true })
}

/// Column offset of card `index` relative to the viewport, for `width`-wide
/// cards and a track at `position`. `None` if the card is out of view.
pub fn card_offset(index: usize, position: f32, width: u16) -> Option<i32> {
    let offset = ((index as f32 - position) * f32::from(width)).round() as i32;
    (offset.abs() < i32::from(width)).then_some(offset)
}

impl Component for CardTrack {
    type Input = CardTrackInput;

    fn update(&mut self, input: Self::Input) {
        self.position = input.position;
        self.current = input.current;
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.render_widget(Block::new().style(self.theme.base()), area);

        let first = self.position.floor().max(0.0) as usize;
        for index in first..=first + 1 {
            let Some(card) = self.cards.get(index) else {
                continue;
            };
            let Some(offset) = card_offset(index, self.position, area.width) else {
                continue;
            };

            let scratch_area = Rect::new(0, 0, area.width, area.height);
            let mut scratch = Buffer::empty(scratch_area);
            card_paragraph(card, self.theme, index == self.current)
                .render(scratch_area, &mut scratch);

            let buf = frame.buffer_mut();
            for col in 0..area.width {
                let Ok(dest) = u16::try_from(offset + i32::from(col)) else {
                    continue;
                };
                if dest >= area.width {
                    continue;
                }
                for row in 0..area.height {
                    buf[(area.x + dest, area.y + row)] = scratch[(col, row)].clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_offset_at_rest() {
        assert_eq!(card_offset(2, 2.0, 40), Some(0));
        assert_eq!(card_offset(3, 2.0, 40), None);
        assert_eq!(card_offset(1, 2.0, 40), None);
    }

    #[test]
    fn test_card_offset_mid_drag() {
        assert_eq!(card_offset(2, 2.25, 40), Some(-10));
        assert_eq!(card_offset(3, 2.25, 40), Some(30));
    }

    #[test]
    fn test_card_offset_rubber_band_before_first() {
        assert_eq!(card_offset(0, -0.1, 40), Some(4));
    }
}
