//! Sequencing between the board service, the prompt and the board state.
//!
//! Network calls are awaited here; their results are handed to the
//! controller as single synchronous calls. A failed fetch delivers nothing
//! and leaves the board as it was.

use thiserror::Error;

use crate::feed::{Category, FeedError, PostId};
use crate::remote::{BoardSource, RemoteError};
use crate::ui::board::BoardController;
use crate::ui::composer::{ComposeError, ComposerIntent, ComposerReducer, ComposerState};
use crate::ui::mvi::Reducer;

pub const APPLY_PROMPT: &str = "Apply the selected filters?";
pub const DELETE_PROMPT: &str = "Delete this post?";

/// Synchronous yes/no question to the user.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub struct BoardSession<S> {
    source: S,
    board: BoardController,
    composer: ComposerState,
    composer_category: Category,
}

impl<S: BoardSource> BoardSession<S> {
    pub fn new(source: S, board: BoardController, composer_category: Category) -> Self {
        Self {
            source,
            board,
            composer: ComposerState::default(),
            composer_category,
        }
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardController {
        &mut self.board
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    /// Refetch the raw list. Returns the number of posts received.
    pub async fn refresh(&mut self) -> Result<usize, RemoteError> {
        match self.source.fetch_posts().await {
            Ok(posts) => {
                let count = posts.len();
                self.board.replace_items(posts);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetching posts failed, keeping current list");
                Err(e)
            }
        }
    }

    /// Ask before committing the tentative filter.
    pub fn apply_filters<P: Prompt>(&mut self, prompt: &mut P) -> bool {
        self.board.request_apply(|| prompt.confirm(APPLY_PROMPT))
    }

    /// Ask, delete, refetch. Returns `false` if the user said no.
    pub async fn delete_post<P: Prompt>(
        &mut self,
        id: PostId,
        prompt: &mut P,
    ) -> Result<bool, SessionError> {
        if !prompt.confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        self.source.delete_post(id).await?;
        self.refresh().await?;
        Ok(true)
    }

    pub fn edit_draft(&mut self, content: impl Into<String>) {
        self.dispatch_composer(ComposerIntent::Edit {
            content: content.into(),
        });
    }

    /// Submit the draft and refetch on success.
    ///
    /// # Errors
    /// [`ComposeError`] if the draft is blank or a submit is in flight;
    /// [`RemoteError`] if the create or the refetch fails. A failed create
    /// keeps the draft.
    pub async fn submit_draft(&mut self) -> Result<(), SessionError> {
        self.composer.check_submit()?;
        self.dispatch_composer(ComposerIntent::Submit);

        let post = self.composer.draft(&self.composer_category);
        match self.source.create_post(&post).await {
            Ok(()) => {
                self.dispatch_composer(ComposerIntent::SubmitSucceeded);
                self.refresh().await?;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Creating post failed");
                self.dispatch_composer(ComposerIntent::SubmitFailed {
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    fn dispatch_composer(&mut self, intent: ComposerIntent) {
        let state = std::mem::take(&mut self.composer);
        self.composer = ComposerReducer::reduce(state, intent);
    }
}
