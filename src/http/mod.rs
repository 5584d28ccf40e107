//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the request handlers: cache
//! validation, MIME lookup, response bodies and response builders.

pub mod body;
pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use body::ResponseBody;
pub use response::{
    build_304_response, build_favicon_response, build_file_response, build_html_response,
    build_status_response,
};
