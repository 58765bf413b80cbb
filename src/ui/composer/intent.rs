use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ComposerIntent {
    /// Draft text replaced.
    Edit { content: String },
    /// Submit pressed. Ignored for blank drafts or while a submit is in flight.
    Submit,
    SubmitSucceeded,
    SubmitFailed { error: String },
}

impl Intent for ComposerIntent {}
