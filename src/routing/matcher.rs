//! Route matching module
//!
//! Maps a request path to one of the application routes. A path that does
//! not match any route, including `/posts/<id>` with an id that is not a
//! plain non-negative integer, yields `None` and never reaches a handler.

use crate::config::HealthConfig;

const POSTS_PREFIX: &str = "/posts/";

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    ListPosts,
    /// `GET /posts/<post_id>`
    GetPost(i64),
    /// Liveness probe
    Liveness,
    /// Readiness probe
    Readiness,
}

/// Find the route for a path
///
/// Health probe paths are checked first when enabled.
pub fn match_route(path: &str, health: &HealthConfig) -> Option<Route> {
    if health.enabled {
        if path == health.liveness_path {
            return Some(Route::Liveness);
        }
        if path == health.readiness_path {
            return Some(Route::Readiness);
        }
    }

    if path == "/" {
        return Some(Route::ListPosts);
    }

    path.strip_prefix(POSTS_PREFIX)
        .and_then(parse_post_id)
        .map(Route::GetPost)
}

/// Parse an integer path segment: ASCII digits only, no sign, must fit `i64`
fn parse_post_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
