//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for route matching,
//! method validation, dispatching and access logging.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, SERVER};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api;
use crate::config::{AppState, HttpConfig};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Route};

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.config.logging.access_log;
    let mut entry = access_log.then(|| AccessLogEntry::from_request(&req, peer_addr));

    // Bodies are never read, so only the method and path outlive the request
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    drop(req);

    let response = dispatch_within(&method, &path, &state).await;
    let response = finalize(response, &state.config.http, method == Method::HEAD);

    if let Some(entry) = entry.as_mut() {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.complete(response.status().as_u16(), body_bytes, started.elapsed());
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch under the `write_timeout` deadline; a zero timeout means no limit
async fn dispatch_within(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let deadline = Duration::from_secs(state.config.performance.write_timeout);
    if deadline.is_zero() {
        return dispatch(method, path, state).await;
    }

    match tokio::time::timeout(deadline, dispatch(method, path, state)).await {
        Ok(response) => response,
        Err(_) => {
            logger::log_warning(&format!(
                "{method} {path} not answered within {} seconds",
                deadline.as_secs()
            ));
            http::build_500_response()
        }
    }
}

/// Route a request to its handler
///
/// Unknown paths get 404 before the method is looked at, so a bad
/// `/posts/<id>` segment is a 404 for every method.
pub async fn dispatch(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let Some(route) = routing::match_route(path, &state.config.health) else {
        return http::build_404_response();
    };

    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return resp;
    }

    match route {
        Route::ListPosts => api::handle_list_posts(state).await,
        Route::GetPost(post_id) => api::handle_get_post(state, post_id).await,
        Route::Liveness => http::build_health_response(true),
        Route::Readiness => api::handle_readiness(state).await,
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Add server-wide headers; HEAD responses keep their headers but lose the body
fn finalize(
    response: Response<Full<Bytes>>,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let (mut parts, body) = response.into_parts();

    match HeaderValue::from_str(&http_config.server_name) {
        Ok(value) => {
            parts.headers.insert(SERVER, value);
        }
        Err(_) => logger::log_warning(&format!(
            "Invalid server_name for Server header: '{}'",
            http_config.server_name
        )),
    }
    if http_config.enable_cors {
        parts
            .headers
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }

    let body = if is_head {
        Full::new(Bytes::new())
    } else {
        body
    };
    Response::from_parts(parts, body)
}
