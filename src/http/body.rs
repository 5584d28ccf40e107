//! Response body type
//!
//! Unifies the two body shapes a response can have: a small buffered body
//! (status pages, listings, the favicon) and a streamed file body that is
//! never fully held in memory. Both are erased into one boxed type so the
//! connection service has a single response signature.

use futures::TryStreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Body type for every response the server produces
pub type ResponseBody = BoxBody<Bytes, std::io::Error>;

/// Fully buffered body for small payloads
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Empty body (304 responses, builder fallbacks)
pub fn empty() -> ResponseBody {
    full(Bytes::new())
}

/// Streamed body reading the file chunk by chunk.
///
/// Backpressure comes from the connection driver polling the stream; if the
/// client disconnects the body is dropped, which closes the file handle.
pub fn file_stream(file: File) -> ResponseBody {
    let stream = ReaderStream::new(file).map_ok(Frame::data);
    StreamBody::new(stream).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_full_body_roundtrip() {
        let body = full("hello");
        let collected = body.collect().await.unwrap().to_bytes();
        assert_eq!(&collected[..], b"hello");
    }

    #[tokio::test]
    async fn test_empty_body() {
        let body = empty();
        let collected = body.collect().await.unwrap().to_bytes();
        assert!(collected.is_empty());
    }

    #[tokio::test]
    async fn test_file_stream_yields_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"streamed content").unwrap();

        let file = File::open(&path).await.unwrap();
        let collected = file_stream(file).collect().await.unwrap().to_bytes();
        assert_eq!(&collected[..], b"streamed content");
    }
}
