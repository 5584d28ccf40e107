// Server module entry point
// Listener construction, the accept loop, and shutdown signalling.

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept loop: serve connections until a shutdown signal arrives.
///
/// Each accepted connection runs on its own task; requests share nothing
/// mutable, only the read-only `AppState`. On shutdown the listener stops
/// accepting and in-flight connections finish naturally.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = signal::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_info("\nShutdown signal received, closing listener");
                break;
            }
        }
    }
}
