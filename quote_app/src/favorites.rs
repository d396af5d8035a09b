//! Transient in-memory favorites list.
//!
//! Nothing here is persisted: the list lives for one run, seeded with two
//! sample quotes, and toggling a favorite flips only the local flag.
use crate::model::quote::DisplayQuote;

/// In-memory list of favorited quotes.
#[derive(Debug, Default)]
pub struct FavoritesList {
    quotes: Vec<DisplayQuote>,
}

impl FavoritesList {
    /// Creates a list seeded with the two sample quotes.
    pub fn with_samples() -> Self {
        Self {
            quotes: vec![
                DisplayQuote::with_date(
                    "Life is like riding a bicycle",
                    "Albert Einstein",
                    "01 Dec 2023-09.15am",
                ),
                DisplayQuote::with_date(
                    "Stay hungry, stay foolish",
                    "Steve Jobs",
                    "02 Dec 2023-03.45pm",
                ),
            ],
        }
    }

    /// Flips the saved flag of the quote at `index`, returning the new state,
    /// or `None` for an out-of-range index. Local state only.
    pub fn toggle_saved(&mut self, index: usize) -> Option<bool> {
        let quote = self.quotes.get_mut(index)?;
        quote.is_saved = !quote.is_saved;
        Some(quote.is_saved)
    }

    /// Iterates over the stored quotes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayQuote> {
        self.quotes.iter()
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
