//! The working list: raw items narrowed by the committed selection.

use super::post::FeedItem;
use super::selection::FilterSelection;

/// Items that survive the committed filter, in raw-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<T> {
    items: Vec<T>,
}

impl<T> Default for FilteredView<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: FeedItem + Clone> FilteredView<T> {
    /// Stable filter of `raw` by `committed`. An empty selection keeps
    /// everything.
    pub fn recompute(raw: &[T], committed: &FilterSelection) -> Self {
        let items = if committed.is_empty() {
            raw.to_vec()
        } else {
            raw.iter()
                .filter(|item| committed.contains(item.category()))
                .cloned()
                .collect()
        };
        Self { items }
    }
}

impl<T> FilteredView<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
