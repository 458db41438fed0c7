// API response envelope types

use serde::Serialize;

use crate::data::{PostDetail, PostSummary};

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    /// Always equals `posts.len()`
    pub total_results: usize,
}

impl From<Vec<PostSummary>> for PostListResponse {
    fn from(posts: Vec<PostSummary>) -> Self {
        Self {
            total_results: posts.len(),
            posts,
        }
    }
}

/// Body of `GET /posts/<post_id>`
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: PostDetail,
}
