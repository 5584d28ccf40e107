//! Bundled fixed assets
//!
//! The favicon is compiled into the binary so `/favicon.ico` is answered
//! regardless of base directory contents. The listing stylesheet is inlined
//! into every directory page.

/// Icon bytes served for `/favicon.ico`
pub const FAVICON: &[u8] = include_bytes!("../assets/favicon.ico");

/// Stylesheet inlined into directory listing pages
pub const LISTING_STYLESHEET: &str = r"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: #24292f;
    max-width: 860px;
    margin: 0 auto;
    padding: 24px;
}
h1 {
    font-size: 1.3em;
    font-weight: 600;
    padding-bottom: 12px;
    margin-bottom: 12px;
    border-bottom: 1px solid #d0d7de;
    word-break: break-all;
}
ul {
    list-style: none;
}
li {
    padding: 4px 8px;
    border-radius: 6px;
}
li:hover {
    background: #f6f8fa;
}
li.dir::before {
    content: '\1F4C1  ';
}
li.file::before {
    content: '\1F4C4  ';
}
a {
    color: #0969da;
    text-decoration: none;
    word-break: break-all;
}
a:hover {
    text-decoration: underline;
}
";
