// Blog API handlers module
// Each handler loads both documents fresh, joins them and renders JSON

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::types::{PostListResponse, PostResponse};
use crate::config::AppState;
use crate::data::{catalog, Comment, LoadError, Post};
use crate::http;
use crate::logger;

/// `GET /` - every post with its comment count
pub async fn handle_list_posts(state: &AppState) -> Response<Full<Bytes>> {
    let (posts, comments) = match load(state).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    let body = PostListResponse::from(catalog::summarize_posts(posts, &comments));
    http::build_json_response(StatusCode::OK, &body, state.config.http.pretty_json)
}

/// `GET /posts/<post_id>` - one post with its comments, or 404
pub async fn handle_get_post(state: &AppState, post_id: i64) -> Response<Full<Bytes>> {
    let (posts, comments) = match load(state).await {
        Ok(data) => data,
        Err(response) => return response,
    };

    match catalog::find_post(posts, comments, post_id) {
        Some(post) => http::build_json_response(
            StatusCode::OK,
            &PostResponse { post },
            state.config.http.pretty_json,
        ),
        None => http::build_404_response(),
    }
}

/// Readiness probe: both documents must load
pub async fn handle_readiness(state: &AppState) -> Response<Full<Bytes>> {
    match state.data.load().await {
        Ok(_) => http::build_health_response(true),
        Err(e) => {
            logger::log_warning(&format!("Readiness check failed: {e}"));
            http::build_health_response(false)
        }
    }
}

async fn load(state: &AppState) -> Result<(Vec<Post>, Vec<Comment>), Response<Full<Bytes>>> {
    state.data.load().await.map_err(|e: LoadError| {
        logger::log_load_failure(&e);
        http::build_500_response()
    })
}
