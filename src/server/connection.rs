// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.1.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve an accepted connection on its own task.
///
/// HTTP/1.1 with keep-alive; requests on the connection are handled
/// sequentially by the router. No connection-wide deadline is applied so
/// long downloads are never cut off.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    let state = Arc::clone(state);
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service_state = Arc::clone(&state);
        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&service_state);
                async move { handler::handle_request(req, peer_addr, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
