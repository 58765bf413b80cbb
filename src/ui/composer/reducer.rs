use crate::ui::composer::intent::ComposerIntent;
use crate::ui::composer::state::ComposerState;
use crate::ui::mvi::Reducer;

pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposerIntent::Edit { content } => ComposerState {
                content,
                last_error: None,
                ..state
            },
            ComposerIntent::Submit => {
                if state.check_submit().is_err() {
                    return state;
                }
                ComposerState {
                    submitting: true,
                    last_error: None,
                    ..state
                }
            }
            ComposerIntent::SubmitSucceeded => ComposerState::default(),
            ComposerIntent::SubmitFailed { error } => ComposerState {
                submitting: false,
                last_error: Some(error),
                ..state
            },
        }
    }
}
