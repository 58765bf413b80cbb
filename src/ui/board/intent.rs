use std::num::NonZeroUsize;

use crate::feed::{Category, Post};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BoardIntent {
    /// A fresh raw list arrived from the board service.
    ItemsLoaded { items: Vec<Post> },
    /// Checkbox for one category clicked.
    Toggle { category: Category },
    /// "All" checkbox clicked.
    ToggleAll,
    /// Apply button pressed; the caller is about to ask for confirmation.
    RequestApply,
    /// Answer to the confirmation prompt.
    ResolveApply { confirmed: bool },
    SetPage { page: NonZeroUsize },
    SetItemsPerPage { items_per_page: NonZeroUsize },
}

impl Intent for BoardIntent {}
