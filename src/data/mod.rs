//! Data module
//!
//! Record types for posts and comments, the file loader that reads them,
//! and the catalog functions that join the two sequences.

pub mod catalog;
mod loader;
mod models;

#[cfg(test)]
pub mod fixtures;

pub use catalog::{PostDetail, PostSummary};
pub use loader::{DataSource, LoadError};
pub use models::{Comment, Post};
