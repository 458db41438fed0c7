//! HTTP response building module
//!
//! Provides builders for the status code responses the API sends,
//! decoupled from the handlers that choose between them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Methods accepted on every application route
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Build JSON response from any serializable body
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    pretty: bool,
) -> Response<Full<Bytes>> {
    let json = if pretty {
        serde_json::to_vec_pretty(body)
    } else {
        serde_json::to_vec(body)
    };

    match json {
        Ok(json) => build_response(status, "application/json", Bytes::from(json)),
        Err(e) => {
            log_error(&format!("Failed to serialize response: {e}"));
            build_500_response()
        }
    }
}

/// Build 404 Not Found response
///
/// Used both for unknown paths and for post ids with no matching post.
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = build_error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    response.headers_mut().insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static(ALLOWED_METHODS),
    );
    response
}

/// Build 500 Internal Server Error response
///
/// The body never carries the underlying cause.
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOWED_METHODS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build plain-text health probe response
pub fn build_health_response(healthy: bool) -> Response<Full<Bytes>> {
    if healthy {
        build_response(StatusCode::OK, "text/plain", Bytes::from_static(b"ok"))
    } else {
        build_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "text/plain",
            Bytes::from_static(b"unavailable"),
        )
    }
}

fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    build_response(status, "application/json", Bytes::from(body.to_string()))
}

fn build_response(status: StatusCode, content_type: &str, body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut fallback = Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = status;
            fallback
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    log_error(&format!("Failed to build {status} response: {error}"));
}

fn log_error(message: &str) {
    crate::logger::log_error(message);
}
