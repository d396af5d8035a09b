//! Quote categories offered by the picker and the selection state.
use std::collections::HashSet;

use clap::ValueEnum;
use strum::{Display, EnumString};

/// Fixed set of categories shown on the category screen.
#[derive(Debug, Clone, Copy, ValueEnum, Display, EnumString, Hash, Eq, PartialEq)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Family quotes.
    Family,
    /// Friendship quotes.
    Friends,
    /// Work quotes.
    Work,
    /// Health quotes.
    Health,
    /// Love quotes.
    Love,
    /// Everything else.
    Other,
}

/// Transient multi-select state for categories.
///
/// Selection is collected and reported but intentionally drives nothing: it
/// is never forwarded to the API or to storage, and no filtering happens.
#[derive(Debug, Default)]
pub struct CategorySelection {
    selected: HashSet<Category>,
}

impl CategorySelection {
    /// Toggles a category, returning whether it is selected afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.selected.remove(&category) {
            false
        } else {
            self.selected.insert(category);
            true
        }
    }

    /// Returns whether the category is currently selected.
    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Renders the selection as a stable, comma-separated list.
    pub fn summary(&self) -> String {
        let mut names: Vec<String> = self.selected.iter().map(Category::to_string).collect();
        names.sort();
        names.join(", ")
    }
}
