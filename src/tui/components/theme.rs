//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::deck::Category;

/// Light or dark palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Accent colors used when a category declares none.
const FALLBACK_ACCENTS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Resolved styles for the current mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub const fn base(self) -> Style {
        match self.mode {
            ThemeMode::Dark => Style::new().fg(Color::White).bg(Color::Rgb(18, 18, 24)),
            ThemeMode::Light => Style::new().fg(Color::Rgb(30, 30, 30)).bg(Color::Rgb(245, 244, 240)),
        }
    }

    pub const fn dim(self) -> Style {
        match self.mode {
            ThemeMode::Dark => Style::new().fg(Color::DarkGray),
            ThemeMode::Light => Style::new().fg(Color::Gray),
        }
    }

    pub const fn heading(self) -> Style {
        self.dim().add_modifier(Modifier::BOLD)
    }

    pub const fn key(self) -> Style {
        Style::new().fg(Color::Cyan)
    }

    /// Accent color of a category, from its `#rrggbb` or a fallback.
    pub fn accent(category: &Category, index: usize) -> Color {
        category.rgb().map_or(
            FALLBACK_ACCENTS[index % FALLBACK_ACCENTS.len()],
            |(r, g, b)| Color::Rgb(r, g, b),
        )
    }

    /// Card background: the accent mixed into the page background.
    pub fn card_background(self, accent: Color) -> Color {
        let (base, weight) = match self.mode {
            ThemeMode::Dark => ((18, 18, 24), 0.18),
            ThemeMode::Light => ((245, 244, 240), 0.12),
        };
        let Color::Rgb(r, g, b) = accent else {
            return Color::Rgb(base.0, base.1, base.2);
        };
        let mix = |from: u8, to: u8| {
            (f32::from(from) + (f32::from(to) - f32::from(from)) * weight).round() as u8
        };
        Color::Rgb(mix(base.0, r), mix(base.1, g), mix(base.2, b))
    }
}
