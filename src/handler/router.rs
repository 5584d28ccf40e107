//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Each request walks the same
//! path: favicon short-circuit, path resolution, a filesystem stat, then
//! dispatch to the file or directory responder. Every fault is caught here
//! and converted to a status response, so the service is infallible and a
//! failing request never affects the listener or other requests.

use crate::assets;
use crate::config::AppState;
use crate::error::ServeError;
use crate::handler::{directory, file, resolve};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::fs;

/// Request context built per request, dropped when the response completes
pub struct RequestContext<'a> {
    /// Path as received in the request line, still percent-encoded
    pub raw_path: &'a str,
    /// Percent-decoded request path
    pub decoded_path: String,
    /// Canonical filesystem path under the base directory
    pub resolved_path: PathBuf,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling.
///
/// Any method is treated as a read; hyper suppresses response bodies for
/// HEAD at the protocol layer.
pub async fn handle_request<B>(
    req: Request<B>,
    remote_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();

    let response = match respond(&req, &state).await {
        Ok(response) => response,
        Err(err) => {
            // Missing paths are routine; everything else gets an error line
            if !matches!(err, ServeError::NotFound) {
                logger::log_error(&format!(
                    "{} {}: {err}",
                    req.method(),
                    req.uri().path()
                ));
            }
            http::build_status_response(err.status(), err.message())
        }
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, remote_addr, &response, started.elapsed());
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route one request to the favicon, file, or directory responder
async fn respond<B>(
    req: &Request<B>,
    state: &AppState,
) -> Result<Response<ResponseBody>, ServeError> {
    let raw_path = req.uri().path();

    // Fixed asset, bypasses path resolution
    if raw_path == "/favicon.ico" {
        return Ok(http::build_favicon_response(assets::FAVICON));
    }

    let decoded_path = resolve::decode(raw_path)?;
    let resolved_path = resolve::resolve(&state.base_dir, &decoded_path).await?;

    let ctx = RequestContext {
        raw_path,
        decoded_path,
        resolved_path,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    let metadata = fs::metadata(&ctx.resolved_path).await?;
    if metadata.is_file() {
        file::serve_file(&ctx, &metadata).await
    } else {
        directory::serve_directory(&ctx, &state.base_dir).await
    }
}

/// Build the access log entry for a completed request
fn access_entry<B>(
    req: &Request<B>,
    remote_addr: SocketAddr,
    response: &Response<ResponseBody>,
    elapsed: Duration,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = req
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry.request_time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    entry
}
