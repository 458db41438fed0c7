// Listener module
// Creates the TCP listener the server accepts connections on

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Pending connection queue length
const BACKLOG: i32 = 1024;

/// Create a non-blocking `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Must be called from within a tokio runtime.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to; port 0 picks a free port
pub fn create_reusable_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow an immediate rebind after restart while old sockets sit in TIME_WAIT
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
