//! Request handler module
//!
//! Path resolution, routing, and the file/directory responders.

pub mod directory;
pub mod file;
pub mod resolve;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
