//! Filter and pagination core of the board.
//!
//! Everything here is synchronous and network-free: it works on a raw list
//! handed in from outside and on user intents.

mod category;
mod error;
mod gate;
mod paginator;
mod post;
mod selection;
mod view;

pub use category::{Category, CategorySet, MBTI_LABELS};
pub use error::FeedError;
pub use gate::{ConfirmGate, GatePhase};
pub use paginator::{page_number, page_size, Paginator, DEFAULT_ITEMS_PER_PAGE};
pub use post::{FeedItem, NewPost, Post, PostId};
pub use selection::FilterSelection;
pub use view::FilteredView;
