//! Routing module
//!
//! Path matching for the post listing, single post and health probe routes.

mod matcher;

pub use matcher::{match_route, Route};
