//! File responder
//!
//! Streams file bytes with the cache tag and content-type headers. The
//! conditional-request decision is made before the file is opened, so no
//! body byte is produced once a 304 is chosen.

use crate::error::ServeError;
use crate::handler::router::RequestContext;
use crate::http::{self, body, cache, mime, ResponseBody};
use hyper::Response;
use std::fs::Metadata;
use std::time::UNIX_EPOCH;
use tokio::fs;

/// Serve a regular file: 304 when the client's validator matches, otherwise
/// a streamed 200
pub async fn serve_file(
    ctx: &RequestContext<'_>,
    metadata: &Metadata,
) -> Result<Response<ResponseBody>, ServeError> {
    let tag = cache::cache_tag(mtime_millis(metadata)?, metadata.len());

    if cache::matches_if_none_match(ctx.if_none_match.as_deref(), &tag) {
        return Ok(http::build_304_response(&tag));
    }

    let content_type = mime::content_type_for(&ctx.resolved_path);
    let file = fs::File::open(&ctx.resolved_path).await?;

    Ok(http::build_file_response(
        body::file_stream(file),
        &content_type,
        &tag,
        metadata.len(),
    ))
}

/// Modification time in milliseconds since the epoch.
/// Pre-epoch mtimes collapse to zero.
fn mtime_millis(metadata: &Metadata) -> Result<u128, ServeError> {
    let modified = metadata.modified()?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    fn context(resolved: PathBuf, if_none_match: Option<&str>) -> RequestContext<'static> {
        RequestContext {
            raw_path: "/a.txt",
            decoded_path: "/a.txt".to_string(),
            resolved_path: resolved,
            if_none_match: if_none_match.map(ToString::to_string),
        }
    }

    #[tokio::test]
    async fn test_fresh_request_streams_body_with_validators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"hello").unwrap();
        let metadata = std::fs::metadata(&path).unwrap();

        let resp = serve_file(&context(path, None), &metadata).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain;charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "5");

        let expected_tag = cache::cache_tag(mtime_millis(&metadata).unwrap(), 5);
        assert_eq!(resp.headers()["ETag"], expected_tag.as_str());
        assert!(expected_tag.ends_with("-5"));

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn test_matching_validator_yields_304() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"hello").unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        let tag = cache::cache_tag(mtime_millis(&metadata).unwrap(), metadata.len());

        let resp = serve_file(&context(path, Some(&tag)), &metadata)
            .await
            .unwrap();
        assert_eq!(resp.status(), 304);
        assert_eq!(resp.headers()["ETag"], tag.as_str());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_stale_validator_yields_full_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"hello").unwrap();
        let metadata = std::fs::metadata(&path).unwrap();

        let resp = serve_file(&context(path, Some("0-0")), &metadata)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"hello");
    }
}
