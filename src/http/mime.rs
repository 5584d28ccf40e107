//! MIME type detection module
//!
//! Maps file extensions to MIME types. The table holds bare types;
//! `content_type_for` appends the charset suffix in one place because file
//! responses carry `;charset=utf-8` uniformly, binary types included.

use std::path::Path;

/// Get the bare MIME type for a file extension
///
/// # Examples
/// ```
/// use lanshare::http::mime::mime_type;
/// assert_eq!(mime_type(Some("html")), "text/html");
/// assert_eq!(mime_type(Some("mp4")), "video/mp4");
/// assert_eq!(mime_type(None), "application/octet-stream");
/// ```
pub fn mime_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md" | "log") => "text/plain",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg" | "ogv") => "video/ogg",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents / archives
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",
        Some("tar") => "application/x-tar",

        // Default
        _ => "application/octet-stream",
    }
}

/// Content-Type header value for a file path: the extension's MIME type
/// with `;charset=utf-8` appended
pub fn content_type_for(path: &Path) -> String {
    let mime = mime_type(path.extension().and_then(|e| e.to_str()));
    format!("{mime};charset=utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(mime_type(Some("html")), "text/html");
        assert_eq!(mime_type(Some("css")), "text/css");
        assert_eq!(mime_type(Some("js")), "application/javascript");
        assert_eq!(mime_type(Some("json")), "application/json");
        assert_eq!(mime_type(Some("png")), "image/png");
        assert_eq!(mime_type(Some("mp4")), "video/mp4");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(mime_type(Some("xyz")), "application/octet-stream");
        assert_eq!(mime_type(None), "application/octet-stream");
    }

    #[test]
    fn test_charset_suffix_applied_uniformly() {
        assert_eq!(
            content_type_for(Path::new("notes.txt")),
            "text/plain;charset=utf-8"
        );
        // Binary types carry the suffix too
        assert_eq!(
            content_type_for(Path::new("photo.png")),
            "image/png;charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("no_extension")),
            "application/octet-stream;charset=utf-8"
        );
    }
}
