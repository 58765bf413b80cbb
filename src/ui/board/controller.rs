//! Single owner of the board state.
//!
//! All intents go through here: input is validated first, so rejected input
//! never reaches the reducer and never changes the state.

use std::num::NonZeroUsize;

use crate::feed::{page_number, page_size, CategorySet, FeedError, GatePhase, Post};
use crate::ui::board::intent::BoardIntent;
use crate::ui::board::reducer::BoardReducer;
use crate::ui::board::state::BoardState;
use crate::ui::mvi::Reducer;

pub struct BoardController {
    state: BoardState,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new(CategorySet::default(), crate::feed::DEFAULT_ITEMS_PER_PAGE)
    }
}

impl BoardController {
    pub fn new(categories: CategorySet, items_per_page: NonZeroUsize) -> Self {
        Self {
            state: BoardState::new(categories, items_per_page),
        }
    }

    fn dispatch(&mut self, intent: BoardIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = BoardReducer::reduce(state, intent);
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Hand over a freshly fetched raw list.
    ///
    /// The list is filtered with the last applied selection. The current
    /// page is kept.
    pub fn replace_items(&mut self, items: Vec<Post>) {
        let count = items.len();
        self.dispatch(BoardIntent::ItemsLoaded { items });
        tracing::debug!(
            raw = count,
            working = self.state.working_items().len(),
            "Board items replaced"
        );
    }

    /// Flip one category checkbox. Returns whether it is now checked.
    ///
    /// # Errors
    /// [`FeedError::InvalidCategory`] for a label outside the category set.
    pub fn toggle(&mut self, label: &str) -> Result<bool, FeedError> {
        let category = self.state.categories().resolve(label).inspect_err(|e| {
            tracing::warn!(label, "Rejected toggle: {}", e);
        })?;
        self.dispatch(BoardIntent::Toggle { category });
        Ok(self.state.is_checked(label))
    }

    /// The "all" checkbox: clears a full selection, otherwise fills it.
    pub fn select_all(&mut self) {
        self.dispatch(BoardIntent::ToggleAll);
    }

    /// Ask `confirm` whether to apply the tentative selection.
    ///
    /// Returns `true` if the selection was committed. A `false` answer leaves
    /// the view and any earlier commitment as they were.
    pub fn request_apply<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        self.dispatch(BoardIntent::RequestApply);
        let confirmed = confirm();
        self.dispatch(BoardIntent::ResolveApply { confirmed });

        let committed = confirmed && self.state.is_committed();
        if committed {
            tracing::info!(
                categories = self.state.committed_selection().len(),
                working = self.state.working_items().len(),
                "Filter applied"
            );
        } else {
            tracing::debug!("Filter apply cancelled");
        }
        committed
    }

    /// Jump to `page`. Pages past the end are allowed and show nothing.
    ///
    /// # Errors
    /// [`FeedError::InvalidPage`] when `page < 1`.
    pub fn set_page(&mut self, page: i64) -> Result<(), FeedError> {
        let page = page_number(page)?;
        self.dispatch(BoardIntent::SetPage { page });
        Ok(())
    }

    /// Change the page size and return to page 1.
    ///
    /// # Errors
    /// [`FeedError::InvalidPageSize`] when `items_per_page < 1`.
    pub fn set_items_per_page(&mut self, items_per_page: i64) -> Result<(), FeedError> {
        let items_per_page = page_size(items_per_page)?;
        self.dispatch(BoardIntent::SetItemsPerPage { items_per_page });
        tracing::debug!(items_per_page = items_per_page.get(), "Page size changed");
        Ok(())
    }

    pub fn categories(&self) -> &CategorySet {
        self.state.categories()
    }

    pub fn visible_page(&self) -> &[Post] {
        self.state.visible_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.state.items_per_page()
    }

    pub fn phase(&self) -> GatePhase {
        self.state.phase()
    }

    pub fn is_committed(&self) -> bool {
        self.state.is_committed()
    }

    pub fn is_filtering_active(&self) -> bool {
        self.state.is_filtering_active()
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.state.is_checked(label)
    }

    pub fn is_all_selected(&self) -> bool {
        self.state.is_all_selected()
    }

    pub fn working_len(&self) -> usize {
        self.state.working_items().len()
    }

    pub fn raw_len(&self) -> usize {
        self.state.raw_items().len()
    }
}
