//! Data loader
//!
//! Reads the posts and comments documents from disk. There is no cache:
//! every call to [`DataSource::load`] re-reads and re-parses both files.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use super::models::{Comment, CommentsDocument, Post, PostsDocument};
use crate::config::DataConfig;

/// Failure to produce the two record sequences
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Source file is not valid JSON or does not have the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed locations of the two source documents
#[derive(Debug, Clone)]
pub struct DataSource {
    posts_path: PathBuf,
    comments_path: PathBuf,
}

impl DataSource {
    pub fn new(posts_path: impl Into<PathBuf>, comments_path: impl Into<PathBuf>) -> Self {
        Self {
            posts_path: posts_path.into(),
            comments_path: comments_path.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.posts_file, &config.comments_file)
    }

    /// Load both documents, preserving record order as stored
    pub async fn load(&self) -> Result<(Vec<Post>, Vec<Comment>), LoadError> {
        let posts: PostsDocument = read_document(&self.posts_path).await?;
        let comments: CommentsDocument = read_document(&self.comments_path).await?;
        Ok((posts.posts, comments.comments))
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
