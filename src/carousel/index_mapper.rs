//! Conversions between the global card index and category-relative positions.
//!
//! All lookups are pure and total: out-of-range inputs are clamped rather than
//! rejected, so a navigation off-by-one can never hard-fail.

use crate::deck::{CategoryId, Deck};

/// Position of a card within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPosition {
    pub category: CategoryId,
    pub relative_index: usize,
    pub category_size: usize,
}

/// Precomputed category views over an immutable deck.
#[derive(Debug, Clone)]
pub struct IndexMapper {
    /// Global indices of each category's cards, in deck order.
    members: Vec<Vec<usize>>,
    /// Category of each global index.
    category_of: Vec<CategoryId>,
    /// Position of each global index within its category.
    relative: Vec<usize>,
}

impl IndexMapper {
    pub fn new(deck: &Deck) -> Self {
        let mut members = vec![Vec::new(); deck.categories().len()];
        let mut category_of = Vec::with_capacity(deck.len());
        let mut relative = Vec::with_capacity(deck.len());

        for global in 0..deck.len() {
            // Deck construction guarantees every card has a declared category.
            let category = deck.category_of(global).unwrap_or(CategoryId(0));
            let view = &mut members[category.0];
            relative.push(view.len());
            view.push(global);
            category_of.push(category);
        }

        Self {
            members,
            category_of,
            relative,
        }
    }

    /// Number of cards in the deck.
    pub fn total(&self) -> usize {
        self.category_of.len()
    }

    /// Index of the last card.
    pub fn last(&self) -> usize {
        self.total().saturating_sub(1)
    }

    pub fn clamp_global(&self, index: i64) -> usize {
        usize::try_from(index.max(0)).map_or(self.last(), |i| i.min(self.last()))
    }

    pub fn category_of(&self, global: usize) -> CategoryId {
        self.category_of[global.min(self.last())]
    }

    /// First deck position in `category`, or `None` if it has no cards.
    pub fn global_index_of_first_in_category(&self, category: CategoryId) -> Option<usize> {
        self.members.get(category.0)?.first().copied()
    }

    pub fn category_relative_index(&self, global: usize) -> CategoryPosition {
        let global = global.min(self.last());
        let category = self.category_of[global];
        CategoryPosition {
            category,
            relative_index: self.relative[global],
            category_size: self.category_size(category),
        }
    }

    pub fn category_size(&self, category: CategoryId) -> usize {
        self.members.get(category.0).map_or(0, Vec::len)
    }

    /// Inverse of [`Self::category_relative_index`], clamped to the category's
    /// bounds. Returns `None` only for a category without cards.
    pub fn global_for_category_relative(&self, category: CategoryId, relative: i64) -> Option<usize> {
        let view = self.category_view(category);
        let last = view.len().checked_sub(1)?;
        let relative = usize::try_from(relative.max(0)).map_or(last, |r| r.min(last));
        Some(view[relative])
    }

    /// Global indices of the cards in `category`.
    pub fn category_view(&self, category: CategoryId) -> &[usize] {
        self.members.get(category.0).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Card, Category};

    /// Deck with categories `[X, X, Y, Y, Y]`.
    fn xxyyy() -> Deck {
        let cards = ["X", "X", "Y", "Y", "Y"]
            .iter()
            .enumerate()
            .map(|(i, c)| Card::new(format!("c{i}"), *c, format!("Card {i}")))
            .collect();
        Deck::new("t", vec![Category::new("X"), Category::new("Y")], cards).unwrap()
    }

    #[test]
    fn test_first_in_category() {
        let mapper = IndexMapper::new(&xxyyy());
        assert_eq!(mapper.global_index_of_first_in_category(CategoryId(0)), Some(0));
        assert_eq!(mapper.global_index_of_first_in_category(CategoryId(1)), Some(2));
        assert_eq!(mapper.global_index_of_first_in_category(CategoryId(7)), None);
    }

    #[test]
    fn test_category_relative_index() {
        let mapper = IndexMapper::new(&xxyyy());
        let pos = mapper.category_relative_index(3);
        assert_eq!(pos.category, CategoryId(1));
        assert_eq!(pos.relative_index, 1);
        assert_eq!(pos.category_size, 3);

        let pos = mapper.category_relative_index(1);
        assert_eq!((pos.relative_index, pos.category_size), (1, 2));
    }

    #[test]
    fn test_clamp_global() {
        let mapper = IndexMapper::new(&xxyyy());
        assert_eq!(mapper.clamp_global(-5), 0);
        assert_eq!(mapper.clamp_global(2), 2);
        assert_eq!(mapper.clamp_global(999), 4);
        assert_eq!(mapper.clamp_global(i64::MAX), 4);
    }

    #[test]
    fn test_inverse_mapping_clamps_to_category() {
        let mapper = IndexMapper::new(&xxyyy());
        assert_eq!(mapper.global_for_category_relative(CategoryId(1), 0), Some(2));
        assert_eq!(mapper.global_for_category_relative(CategoryId(1), 2), Some(4));
        assert_eq!(mapper.global_for_category_relative(CategoryId(1), 10), Some(4));
        assert_eq!(mapper.global_for_category_relative(CategoryId(0), -1), Some(0));
        assert_eq!(mapper.global_for_category_relative(CategoryId(5), 0), None);
    }

    #[test]
    fn test_interleaved_categories() {
        let cards = vec![
            Card::new("a", "X", "A"),
            Card::new("b", "Y", "B"),
            Card::new("c", "X", "C"),
        ];
        let deck = Deck::new("t", vec![Category::new("X"), Category::new("Y")], cards).unwrap();
        let mapper = IndexMapper::new(&deck);
        assert_eq!(mapper.category_view(CategoryId(0)), &[0, 2]);
        assert_eq!(mapper.category_relative_index(2).relative_index, 1);
        assert_eq!(mapper.global_for_category_relative(CategoryId(0), 1), Some(2));
    }
}
