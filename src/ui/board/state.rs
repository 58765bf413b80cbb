use std::num::NonZeroUsize;

use crate::feed::{
    CategorySet, ConfirmGate, FilterSelection, FilteredView, GatePhase, Paginator, Post,
};
use crate::ui::mvi::UiState;

/// Everything the board view renders from.
///
/// `view` is always the raw list filtered by `gate.committed_selection()`;
/// the reducer recomputes it whenever either side changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub(super) categories: CategorySet,
    pub(super) raw: Vec<Post>,
    pub(super) selection: FilterSelection,
    pub(super) gate: ConfirmGate,
    pub(super) view: FilteredView<Post>,
    pub(super) paginator: Paginator,
}

impl UiState for BoardState {}

impl BoardState {
    pub fn new(categories: CategorySet, items_per_page: NonZeroUsize) -> Self {
        Self {
            categories,
            paginator: Paginator::new(items_per_page),
            ..Self::default()
        }
    }

    pub(super) fn recompute_view(&mut self) {
        self.view = FilteredView::recompute(&self.raw, self.gate.committed_selection());
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn raw_items(&self) -> &[Post] {
        &self.raw
    }

    /// Tentative selection, for checkbox reflection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn committed_selection(&self) -> &FilterSelection {
        self.gate.committed_selection()
    }

    pub fn phase(&self) -> GatePhase {
        self.gate.phase()
    }

    pub fn is_committed(&self) -> bool {
        self.gate.is_committed()
    }

    pub fn is_filtering_active(&self) -> bool {
        self.gate.is_filtering_active()
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.selection.contains(label)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.categories)
    }

    pub fn working_items(&self) -> &[Post] {
        self.view.items()
    }

    pub fn visible_page(&self) -> &[Post] {
        self.paginator.visible_slice(self.view.items())
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.paginator.items_per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.view.len())
    }

    pub fn is_page_out_of_range(&self) -> bool {
        self.paginator.is_out_of_range(self.view.len())
    }
}
