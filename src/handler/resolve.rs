//! Request path resolution
//!
//! Maps a raw request path to an absolute filesystem path under the base
//! directory: percent-decode, join, canonicalize, then the containment
//! check. Resolved paths outside the base directory are refused.

use crate::error::ServeError;
use crate::logger;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Percent-decode the raw request path.
///
/// Fails with a 400-class error when the decoded bytes are not valid UTF-8.
/// Escape triples that are not valid percent-encoding pass through
/// literally, matching the decoder's semantics; such paths then miss on the
/// filesystem and end as 404.
pub fn decode(raw_path: &str) -> Result<String, ServeError> {
    let decoded = percent_decode_str(raw_path).decode_utf8()?;
    Ok(decoded.into_owned())
}

/// Resolve a decoded request path to a canonical filesystem path.
///
/// Canonicalization resolves `..` segments and symlinks; anything landing
/// outside `base_dir` is answered with 403.
pub async fn resolve(base_dir: &Path, decoded_path: &str) -> Result<PathBuf, ServeError> {
    let joined = base_dir.join(decoded_path.trim_start_matches('/'));
    let resolved = fs::canonicalize(&joined).await?;

    if !resolved.starts_with(base_dir) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {decoded_path} -> {}",
            resolved.display()
        ));
        return Err(ServeError::PermissionDenied);
    }

    Ok(resolved)
}
