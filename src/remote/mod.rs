//! The board service: where raw lists come from and where creates and
//! deletes go.

mod client;
mod error;

use async_trait::async_trait;

use crate::feed::{NewPost, Post, PostId};

pub use client::BoardClient;
pub use error::RemoteError;

/// Source of posts and sink for post mutations.
#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError>;

    async fn create_post(&self, post: &NewPost) -> Result<(), RemoteError>;

    async fn delete_post(&self, id: PostId) -> Result<(), RemoteError>;
}
