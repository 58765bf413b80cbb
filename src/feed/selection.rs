//! Tentative category selection, as reflected by the filter checkboxes.

use std::collections::BTreeSet;

use super::category::{Category, CategorySet};
use super::error::FeedError;

/// Categories the user has checked but not necessarily applied.
///
/// Always a subset of the [`CategorySet`] it was mutated against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    members: BTreeSet<Category>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `label`. Returns whether it is now selected.
    ///
    /// # Errors
    /// [`FeedError::InvalidCategory`] if `label` is not in `categories`;
    /// the selection is left untouched.
    pub fn toggle(&mut self, categories: &CategorySet, label: &str) -> Result<bool, FeedError> {
        let category = categories.resolve(label)?;
        if self.members.remove(label) {
            Ok(false)
        } else {
            self.members.insert(category);
            Ok(true)
        }
    }

    /// Toggle-all: clears a full selection, otherwise selects everything.
    pub fn toggle_all(&mut self, categories: &CategorySet) {
        if self.is_all_selected(categories) {
            self.members.clear();
        } else {
            self.members = categories.iter().cloned().collect();
        }
    }

    /// Full means "as many members as the set has labels".
    pub fn is_all_selected(&self, categories: &CategorySet) -> bool {
        self.members.len() == categories.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.members.contains(label)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.members.iter()
    }
}
