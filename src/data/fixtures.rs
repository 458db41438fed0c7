// Shared test data for the loader, catalog and request handler tests

use temp_dir::TempDir;

use super::DataSource;
use crate::config::Config;

pub const POSTS: &str = r#"{"posts": [
    {"id": 1, "title": "A", "body": "b", "author": "x", "created_at": "t"}
]}"#;

pub const COMMENTS: &str = r#"{"comments": [
    {"user": "u", "post_id": 1, "comment": "hi", "created_at": "t2"}
]}"#;

/// Write both documents into `dir` and return a source pointing at them
pub fn write_source(dir: &TempDir, posts: &str, comments: &str) -> DataSource {
    let posts_path = dir.child("posts.json");
    let comments_path = dir.child("comments.json");
    std::fs::write(&posts_path, posts).unwrap();
    std::fs::write(&comments_path, comments).unwrap();
    DataSource::new(posts_path, comments_path)
}

/// Configuration whose data section points at the documents in `dir`
pub fn config_for(dir: &TempDir, extra_toml: &str) -> Config {
    let toml = format!(
        "[data]\nposts_file = '{}'\ncomments_file = '{}'\n\n[logging]\naccess_log = false\n\n{extra_toml}",
        dir.child("posts.json").display(),
        dir.child("comments.json").display(),
    );
    Config::from_toml_str(&toml).unwrap()
}
