// Connection handling module
// Accepts a single TCP connection and serves it with hyper

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state, including the active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            // Exceeded limit: rollback counter and reject
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive and the request-head timeout
/// 3. Serves the connection with the request handler
/// 4. Decrements the connection counter when done
///
/// There is no limit on the lifetime of a busy connection. The connection is
/// closed when the next request head does not arrive in time; each response is
/// bounded separately by the request handler.
fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .keep_alive(state.config.performance.keep_alive_timeout > 0)
            .header_read_timeout(head_timeout(&state));

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&service_state);
                async move { handler::handle_request(req, state, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

/// How long a connection may wait for a request head
///
/// With keep-alive on this is the idle limit between requests, otherwise it
/// only covers reading the first request.
fn head_timeout(state: &AppState) -> Duration {
    let performance = &state.config.performance;
    if performance.keep_alive_timeout > 0 {
        Duration::from_secs(performance.keep_alive_timeout)
    } else {
        Duration::from_secs(performance.read_timeout)
    }
}
