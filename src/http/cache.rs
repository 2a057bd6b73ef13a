//! Conditional request support for transmitted files
//!
//! `ETag`s are derived from file content; `If-None-Match` is compared with weak semantics.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// `Cache-Control` value for files served through page routes
pub const PAGE_CACHE_CONTROL: &str = "public, max-age=3600";

/// Quoted `ETag` from content length and hash, e.g. `"1a-5f2c..."`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// True when the client's `If-None-Match` names `etag` (or `*`)
///
/// Accepts a comma separated list; a `W/` prefix on the client tag is ignored.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
    })
}
