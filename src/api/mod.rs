// API module entry
// JSON endpoints serving posts and their comments

mod handlers;
mod types;

pub use handlers::{handle_get_post, handle_list_posts, handle_readiness};
