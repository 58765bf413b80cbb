//! Items shown on the board.

use serde::{Deserialize, Serialize};

/// Anything the feed can filter: a stable id and one category label.
pub trait FeedItem {
    type Id: Clone + PartialEq + std::fmt::Debug;

    fn id(&self) -> Self::Id;

    fn category(&self) -> &str;
}

pub type PostId = u64;

/// A board post as served by the board API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub nickname: String,
    pub content: String,
    pub mbti: String,
}

impl FeedItem for Post {
    type Id = PostId;

    fn id(&self) -> PostId {
        self.id
    }

    fn category(&self) -> &str {
        &self.mbti
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub mbti: String,
    pub content: String,
}
