//! Page size and page index over the working list.

use std::num::NonZeroUsize;
use std::ops::Range;

use super::error::FeedError;

/// Page size used until the user picks another one.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Validate a user-supplied page size.
pub fn page_size(value: i64) -> Result<NonZeroUsize, FeedError> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(FeedError::InvalidPageSize { value })
}

/// Validate a user-supplied, 1-based page number.
pub fn page_number(value: i64) -> Result<NonZeroUsize, FeedError> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(FeedError::InvalidPage { value })
}

/// Current page and page size.
///
/// The page is not clamped to the list: a page past the end shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: NonZeroUsize,
    items_per_page: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: NonZeroUsize::MIN,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// Change the page size. Always returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: NonZeroUsize) {
        self.items_per_page = items_per_page;
        self.reset();
    }

    pub fn set_page(&mut self, page: NonZeroUsize) {
        self.current_page = page;
    }

    pub fn reset(&mut self) {
        self.current_page = NonZeroUsize::MIN;
    }

    /// `ceil(len / items_per_page)`; 0 for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.items_per_page.get())
    }

    /// Index window of the current page, clamped to `len`.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let per_page = self.items_per_page.get();
        let start = (self.current_page.get() - 1).saturating_mul(per_page);
        let end = self.current_page.get().saturating_mul(per_page);
        start.min(len)..end.min(len)
    }

    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    /// True when the current page lies past the last page.
    pub fn is_out_of_range(&self, len: usize) -> bool {
        self.current_page.get() > self.total_pages(len).max(1)
    }
}
