// Blog record types
// Posts and comments exactly as they appear in the source documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog entry from the posts document
///
/// Only `id` is interpreted. Every other key (`title`, `body`, `author`,
/// `created_at`, anything else) is kept in `fields` as stored, whatever its
/// JSON type, so a record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Post {
    /// Drop a passthrough key that a derived output field is about to replace
    #[must_use]
    pub fn without_field(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }
}

/// A user remark attached to a post through `post_id`
///
/// `post_id` may reference a post that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Top-level shape of the posts document
#[derive(Debug, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<Post>,
}

/// Top-level shape of the comments document
#[derive(Debug, Deserialize)]
pub struct CommentsDocument {
    pub comments: Vec<Comment>,
}
