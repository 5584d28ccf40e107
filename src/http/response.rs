//! HTTP response building module
//!
//! Provides builders for the response shapes the server produces, decoupled
//! from routing logic. Builder errors cannot happen with the fixed header
//! names used here, but the fallback keeps the service infallible.

use crate::http::body::{self, ResponseBody};
use crate::logger;
use hyper::{Response, StatusCode};

/// Build a plain-text status response (400/403/404/500)
pub fn build_status_response(status: StatusCode, message: &'static str) -> Response<ResponseBody> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", message.len())
        .body(body::full(message))
        .unwrap_or_else(|e| {
            log_build_error("status", &e);
            Response::new(body::empty())
        })
}

/// Build 304 Not Modified response: empty body, the tag echoed, no Content-Type
pub fn build_304_response(etag: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(body::empty())
        })
}

/// Build the favicon response: fixed icon bytes, a year-long Cache-Control,
/// no ETag and no Content-Type
pub fn build_favicon_response(icon: &'static [u8]) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Cache-Control", "max-age=31536000")
        .header("Content-Length", icon.len())
        .body(body::full(icon))
        .unwrap_or_else(|e| {
            log_build_error("favicon", &e);
            Response::new(body::empty())
        })
}

/// Build a 200 HTML response (directory listings)
pub fn build_html_response(content: String) -> Response<ResponseBody> {
    let content_length = content.len();
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html;charset=utf-8")
        .header("Content-Length", content_length)
        .body(body::full(content))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(body::empty())
        })
}

/// Build a 200 file response around an already-opened body stream
pub fn build_file_response(
    stream: ResponseBody,
    content_type: &str,
    etag: &str,
    content_length: u64,
) -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .body(stream)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(body::empty())
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
