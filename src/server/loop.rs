// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop for the blog API listener
///
/// Returns once `shutdown` is notified. The listener is closed on return;
/// connections already being served keep running in their own tasks.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }
}
