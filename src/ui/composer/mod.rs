//! Draft-and-submit state for writing a new post.

mod intent;
mod reducer;
mod state;

pub use intent::ComposerIntent;
pub use reducer::ComposerReducer;
pub use state::{ComposeError, ComposerState};
