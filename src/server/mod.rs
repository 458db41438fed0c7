// Server module entry point
// Binds the listener, runs the accept loop and handles shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
pub use signal::start_signal_handler;

/// Startup failures; request-level failures never surface here
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address: {0}")]
    Address(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the configured address and serve until `shutdown` is notified
pub async fn serve(state: Arc<AppState>, shutdown: Arc<Notify>) -> Result<(), ServerError> {
    let addr = state
        .config
        .get_socket_addr()
        .map_err(ServerError::Address)?;
    let listener =
        create_reusable_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

    let bound = listener.local_addr().unwrap_or(addr);
    logger::log_server_start(&bound, &state.config);

    start_server_loop(listener, state, shutdown).await;
    logger::log_shutdown();
    Ok(())
}
