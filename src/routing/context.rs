// Request/response exchange handed to request handlers

use hyper::{Method, StatusCode};
use std::path::{Path, PathBuf};

use crate::http::QueryParams;

/// One live request/response exchange
#[derive(Debug)]
pub struct HttpContext {
    pub request: HttpRequest,
    pub response: HttpResponse,
}

impl HttpContext {
    pub fn new(request: HttpRequest) -> Self {
        Self {
            request,
            response: HttpResponse::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
}

/// Response under construction
///
/// Status and content type stay unset until a handler sets them; the host
/// then applies its defaults (200 and `http.default_content_type`).
#[derive(Debug, Default)]
pub struct HttpResponse {
    status: Option<StatusCode>,
    content_type: Option<String>,
    body: Vec<u8>,
    file: Option<PathBuf>,
}

impl HttpResponse {
    /// Append text to the body
    pub fn write(&mut self, text: &str) {
        self.body.extend_from_slice(text.as_bytes());
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    /// Ask the host to send the file at `path` as the response body
    ///
    /// The host reads the file after the handler returns; a written body is discarded.
    pub fn transmit_file(&mut self, path: impl Into<PathBuf>) {
        self.file = Some(path.into());
    }

    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn transmitted_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_defaults_unset() {
        let resp = HttpResponse::default();
        assert_eq!(resp.status(), None);
        assert_eq!(resp.content_type(), None);
        assert!(resp.body().is_empty());
        assert!(resp.transmitted_file().is_none());
    }

    #[test]
    fn test_write_appends() {
        let mut resp = HttpResponse::default();
        resp.write("Recieved ");
        resp.write("Id:1");
        assert_eq!(resp.body(), b"Recieved Id:1");
    }
}
