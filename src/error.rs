//! Request error taxonomy
//!
//! Every request-scoped fault is classified here and mapped to an HTTP
//! status at the router boundary. Faults never escape a request.

use hyper::StatusCode;
use thiserror::Error;

/// Faults that can occur while serving a single request
#[derive(Debug, Error)]
pub enum ServeError {
    /// Request path percent-decodes to bytes that are not valid UTF-8
    #[error("malformed percent-encoding in request path: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Target path does not exist
    #[error("not found")]
    NotFound,

    /// Filesystem access denied, or the resolved path escapes the base directory
    #[error("permission denied")]
    PermissionDenied,

    /// Any other I/O fault (read, stat, enumeration)
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for ServeError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }
}

impl ServeError {
    /// HTTP status this fault maps to
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short plain-text body for the status response
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Decode(_) => "400 Bad Request",
            Self::NotFound => "404 Not Found",
            Self::PermissionDenied => "403 Forbidden",
            Self::Io(_) => "500 Internal Server Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ServeError::from(not_found).status(), StatusCode::NOT_FOUND);

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert_eq!(ServeError::from(denied).status(), StatusCode::FORBIDDEN);

        let other = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert_eq!(
            ServeError::from(other).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServeError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ServeError::PermissionDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(ServeError::NotFound.message(), "404 Not Found");
    }
}
