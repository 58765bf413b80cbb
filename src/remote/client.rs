use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::RemoteConfig;
use crate::feed::{NewPost, Post, PostId};
use crate::remote::error::RemoteError;
use crate::remote::BoardSource;

/// HTTP client for the board API.
///
/// Routes:
/// - `GET    {base}/api/board`       list posts
/// - `POST   {base}/api/board/write` create a post
/// - `DELETE {base}/api/board/{id}`  delete a post
pub struct BoardClient {
    client: Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::InvalidBaseUrl {
                url: config.base_url.clone(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(status = status.as_u16(), error = %e, "Failed to read error body");
                unreadable_body(&e)
            }
        };
        Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn unreadable_body(error: &dyn std::fmt::Display) -> String {
    format!("<unreadable body: {}>", error)
}

#[async_trait]
impl BoardSource for BoardClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError> {
        let response = self.client.get(self.url("/api/board")).send().await?;
        let posts: Vec<Post> = Self::check(response).await?.json().await?;
        tracing::debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(self.url("/api/board/write"))
            .json(post)
            .send()
            .await?;
        Self::check(response).await?;
        tracing::info!(mbti = %post.mbti, "Post created");
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RemoteError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/board/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        tracing::info!(id, "Post deleted");
        Ok(())
    }
}
