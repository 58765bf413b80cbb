//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_board;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mbti_board::feed::{NewPost, Post, PostId};
use mbti_board::remote::{BoardSource, RemoteError};

pub fn post(id: PostId, mbti: &str) -> Post {
    Post {
        id,
        nickname: format!("user{}", id),
        content: format!("post {}", id),
        mbti: mbti.to_string(),
    }
}

/// `count` posts with ids 1..=count, tagged alternately `a` / `b`.
pub fn alternating(count: u64, a: &str, b: &str) -> Vec<Post> {
    (1..=count)
        .map(|id| post(id, if id % 2 == 1 { a } else { b }))
        .collect()
}

pub fn ids(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id).collect()
}

/// In-memory board service. Clones share the same posts, so a test can keep
/// a handle after moving one into a session.
#[derive(Clone)]
pub struct MemorySource {
    inner: Arc<Inner>,
}

struct Inner {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicU64,
    fail_fetch: AtomicBool,
    fail_create: AtomicBool,
    fetches: AtomicU64,
}

impl MemorySource {
    pub fn new(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Inner {
                posts: Mutex::new(posts),
                next_id: AtomicU64::new(next_id),
                fail_fetch: AtomicBool::new(false),
                fail_create: AtomicBool::new(false),
                fetches: AtomicU64::new(0),
            }),
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.inner.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.inner.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn push(&self, post: Post) {
        self.inner.posts.lock().unwrap().push(post);
    }

    pub fn len(&self) -> usize {
        self.inner.posts.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> u64 {
        self.inner.fetches.load(Ordering::SeqCst)
    }
}

fn unavailable() -> RemoteError {
    RemoteError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[async_trait]
impl BoardSource for MemorySource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError> {
        self.inner.fetches.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_fetch.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.inner.posts.lock().unwrap().clone())
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), RemoteError> {
        if self.inner.fail_create.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.posts.lock().unwrap().push(Post {
            id,
            nickname: String::new(),
            content: post.content.clone(),
            mbti: post.mbti.clone(),
        });
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RemoteError> {
        let mut posts = self.inner.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RemoteError::Status {
                status: 404,
                body: format!("post {} not found", id),
            });
        }
        Ok(())
    }
}
