//! Directory responder
//!
//! Enumerates the direct children of a directory, partitions them into
//! files and subdirectories, and renders a navigable HTML listing page.
//! Entries keep raw enumeration order; no sort is applied, so the order is
//! filesystem-dependent.

use crate::assets;
use crate::error::ServeError;
use crate::handler::router::RequestContext;
use crate::http::{self, ResponseBody};
use hyper::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::Write;
use std::path::Path;
use tokio::fs;

/// Characters percent-encoded when a child name is turned into an href
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'&');

/// Direct children of a directory, partitioned by kind in enumeration order
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

/// Serve a directory as a rendered HTML listing page
pub async fn serve_directory(
    ctx: &RequestContext<'_>,
    base_dir: &Path,
) -> Result<Response<ResponseBody>, ServeError> {
    let listing = list_entries(ctx, base_dir).await?;
    let display = base_dir.join(ctx.decoded_path.trim_start_matches('/'));
    let html = render_listing(&display.display().to_string(), ctx.raw_path, &listing);
    Ok(http::build_html_response(html))
}

/// Enumerate and classify direct children (one level, non-recursive).
///
/// Each child is classified by statting base dir + request path + name,
/// the same path its href resolves to. A failed per-entry stat aborts the
/// whole listing and surfaces as a server-side fault, whatever its kind: a
/// child that enumerated but cannot be statted (dangling symlink, race
/// with a delete) is not a missing resource, the listing itself broke.
/// Partial results are discarded.
async fn list_entries(
    ctx: &RequestContext<'_>,
    base_dir: &Path,
) -> Result<DirectoryListing, ServeError> {
    let request_dir = base_dir.join(ctx.decoded_path.trim_start_matches('/'));
    let mut entries = fs::read_dir(&ctx.resolved_path).await?;
    let mut listing = DirectoryListing::default();

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = fs::metadata(request_dir.join(&name))
            .await
            .map_err(ServeError::Io)?;
        if metadata.is_file() {
            listing.files.push(name);
        } else {
            listing.dirs.push(name);
        }
    }

    Ok(listing)
}

/// Render the listing page. Pure function of its inputs; names are
/// HTML-escaped and hrefs percent-encoded.
fn render_listing(display_path: &str, raw_path: &str, listing: &DirectoryListing) -> String {
    let mut page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Index of {title}</title>\n\
         <link rel=\"icon\" type=\"image/x-icon\" href=\"/favicon.ico\">\n\
         <style>{style}</style>\n\
         </head>\n<body>\n\
         <h1>Index of {title}</h1>\n<ul>\n",
        title = escape_html(display_path),
        style = assets::LISTING_STYLESHEET,
    );

    if raw_path != "/" {
        page.push_str("<li class=\"dir\"><a href=\"..\">..</a></li>\n");
    }

    for name in &listing.dirs {
        let _ = writeln!(
            page,
            "<li class=\"dir\"><a href=\"{}\">{}/</a></li>",
            href_for(raw_path, name, true),
            escape_html(name),
        );
    }
    for name in &listing.files {
        let _ = writeln!(
            page,
            "<li class=\"file\"><a href=\"{}\">{}</a></li>",
            href_for(raw_path, name, false),
            escape_html(name),
        );
    }

    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

/// Absolute href for a child entry. The raw request path is already
/// percent-encoded, so only the child name needs encoding.
fn href_for(raw_path: &str, name: &str, is_dir: bool) -> String {
    let encoded = utf8_percent_encode(name, HREF_ENCODE);
    let slash = if raw_path.ends_with('/') { "" } else { "/" };
    let suffix = if is_dir { "/" } else { "" };
    format!("{raw_path}{slash}{encoded}{suffix}")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
