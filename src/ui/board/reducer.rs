use crate::ui::board::intent::BoardIntent;
use crate::ui::board::state::BoardState;
use crate::ui::mvi::Reducer;

/// Pure transitions of the board state.
///
/// Every selection mutation invalidates the confirm gate here and nowhere
/// else. Prompting the user is the caller's job: it dispatches
/// `RequestApply`, asks, then dispatches `ResolveApply`.
pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::ItemsLoaded { items } => {
                // Re-filter with the committed selection, not the tentative one.
                state.raw = items;
                state.recompute_view();
            }
            BoardIntent::Toggle { category } => {
                if state
                    .selection
                    .toggle(&state.categories, category.as_str())
                    .is_ok()
                {
                    state.gate.invalidate();
                }
            }
            BoardIntent::ToggleAll => {
                state.selection.toggle_all(&state.categories);
                state.gate.invalidate();
            }
            BoardIntent::RequestApply => state.gate.begin_apply(),
            BoardIntent::ResolveApply { confirmed } => {
                if state.gate.resolve(confirmed, &state.selection) {
                    state.recompute_view();
                    state.paginator.reset();
                }
            }
            BoardIntent::SetPage { page } => state.paginator.set_page(page),
            BoardIntent::SetItemsPerPage { items_per_page } => {
                state.paginator.set_items_per_page(items_per_page)
            }
        }
        state
    }
}
