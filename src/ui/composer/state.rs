use thiserror::Error;

use crate::feed::{Category, NewPost};
use crate::ui::mvi::UiState;

/// Why a draft cannot be submitted right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Post content is empty")]
    EmptyContent,

    #[error("A post is already being submitted")]
    AlreadySubmitting,
}

/// Draft of a new post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    pub content: String,
    /// A create request is in flight.
    pub submitting: bool,
    /// Error from the last failed submit, cleared on edit or resubmit.
    pub last_error: Option<String>,
}

impl UiState for ComposerState {}

impl ComposerState {
    /// Check whether `Submit` would be accepted.
    pub fn check_submit(&self) -> Result<(), ComposeError> {
        if self.submitting {
            return Err(ComposeError::AlreadySubmitting);
        }
        if self.content.trim().is_empty() {
            return Err(ComposeError::EmptyContent);
        }
        Ok(())
    }

    /// Request body for the current draft.
    pub fn draft(&self, category: &Category) -> NewPost {
        NewPost {
            mbti: category.to_string(),
            content: self.content.clone(),
        }
    }
}
