//! The card deck: an ordered, immutable set of cards grouped into categories.
//!
//! A deck is validated once when it is built and never mutated afterwards, so
//! everything derived from it (category views, index maps) can be computed a
//! single time.

use std::{
    collections::HashSet, error::Error as StdError, fmt, fs, path::Path,
    result::Result as StdResult,
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};

const SAMPLE_DECK: &str = include_str!("sample.json");

/// Position of a category in the deck's vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub usize);

/// A named partition of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Accent color as `#rrggbb`.
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: None,
        }
    }

    /// Parse the accent color into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A single card. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub when_to_use: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}

impl Card {
    pub fn new(id: impl Into<String>, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            explanation: String::new(),
            when_to_use: None,
            example: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    Empty,
    DuplicateCategory(String),
    DuplicateCardId(String),
    UnknownCategory { card_id: String, category: String },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "deck has no cards"),
            Self::DuplicateCategory(name) => write!(f, "category {name:?} is declared twice"),
            Self::DuplicateCardId(id) => write!(f, "card id {id:?} is used more than once"),
            Self::UnknownCategory { card_id, category } => {
                write!(f, "card {card_id:?} uses undeclared category {category:?}")
            }
        }
    }
}

impl StdError for DeckError {}

#[derive(Deserialize)]
struct DeckFile {
    #[serde(default = "default_title")]
    title: String,
    categories: Vec<Category>,
    cards: Vec<Card>,
}

fn default_title() -> String {
    "Deck".to_string()
}

/// Ordered, validated, read-only sequence of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    categories: Vec<Category>,
    cards: Vec<Card>,
    /// Category of each card, parallel to `cards`.
    card_categories: Vec<CategoryId>,
}

impl Deck {
    pub fn new(
        title: impl Into<String>,
        categories: Vec<Category>,
        cards: Vec<Card>,
    ) -> StdResult<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut names = HashSet::new();
        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(DeckError::DuplicateCategory(category.name.clone()));
            }
        }

        let mut ids = HashSet::new();
        let mut card_categories = Vec::with_capacity(cards.len());
        for card in &cards {
            if !ids.insert(card.id.as_str()) {
                return Err(DeckError::DuplicateCardId(card.id.clone()));
            }
            let id = categories
                .iter()
                .position(|c| c.name == card.category)
                .map(CategoryId)
                .ok_or_else(|| DeckError::UnknownCategory {
                    card_id: card.id.clone(),
                    category: card.category.clone(),
                })?;
            card_categories.push(id);
        }

        for (i, category) in categories.iter().enumerate() {
            if !card_categories.contains(&CategoryId(i)) {
                warn!(category = %category.name, "Category has no cards");
            }
        }

        Ok(Self {
            title: title.into(),
            categories,
            cards,
            card_categories,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: DeckFile = serde_json::from_str(json)?;
        Ok(Self::new(file.title, file.categories, file.cards)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let wrap = |source: Error| Error::DeckFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let json = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let deck = Self::from_json(&json).map_err(wrap)?;
        info!(
            path = %path.display(),
            cards = deck.len(),
            categories = deck.categories.len(),
            "Loaded deck"
        );
        Ok(deck)
    }

    /// The built-in deck used when no deck file is available.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_DECK)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of cards; never zero.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: an empty deck cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    /// Category of the card at `index`.
    pub fn category_of(&self, index: usize) -> Option<CategoryId> {
        self.card_categories.get(index).copied()
    }

    /// Whether the card at `index` opens a run of its category.
    pub fn is_first_in_category(&self, index: usize) -> bool {
        match index {
            0 => true,
            i => self.card_categories.get(i) != self.card_categories.get(i - 1),
        }
    }
}
