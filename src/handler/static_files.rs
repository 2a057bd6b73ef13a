//! Static file transmission module
//!
//! Sends the file a page route asked for, with `ETag` support.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::path::Path;
use tokio::fs;

use crate::http::{self, cache, mime};
use crate::logger;

/// Read and send `file_path`; missing or unreadable files answer 404
pub async fn transmit_file(file_path: &Path, if_none_match: Option<&str>) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => build_file_response(content, mime::content_type_for(file_path), if_none_match),
        Err(e) => {
            logger::log_warning(&format!(
                "Page file '{}' could not be read: {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}

fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    if_none_match: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&content);

    // Client already has this version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let content_length = content.len();
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", &etag)
        .header("Cache-Control", cache::PAGE_CACHE_CONTROL)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            http::response::log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}
