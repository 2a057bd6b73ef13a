//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! resolution, handler execution and conversion of the handler's output into
//! an HTTP response.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, StatusCode, Version};
use std::borrow::Cow;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{AppState, HttpConfig};
use crate::handler::static_files;
use crate::http::{self, QueryParams};
use crate::logger::{self, AccessLogEntry};
use crate::routing::{HttpContext, HttpRequest, HttpResponse};

/// Main entry point for HTTP request handling
///
/// The request body is never read by any route, so it is dropped up front.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, _) = req.into_parts();
    let is_head = parts.method == Method::HEAD;

    let (response, route) = dispatch(&parts, &state).await;
    let response = http::finalize_response(response, &state.config.http.server_name, is_head);

    if state.access_log {
        let entry = build_access_entry(&parts, &response, peer_addr, route, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Returns the response and the name of the route that produced it
async fn dispatch(parts: &Parts, state: &AppState) -> (Response<Full<Bytes>>, Option<String>) {
    let http_config = &state.config.http;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&parts.method, http_config.enable_cors) {
        return (resp, None);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(parts, http_config.max_body_size) {
        return (resp, None);
    }

    // 3. Resolve the decoded path against the route table
    let path = decode_path(parts.uri.path());
    let query = QueryParams::parse(parts.uri.query());
    let Some(resolved) = state.route_table.resolve(&path, &query) else {
        logger::log_debug(&format!("No route claimed {path}"));
        return (http::build_404_response(), None);
    };

    // 4. Run a fresh handler for this request
    let handler = resolved.data.create_handler();
    logger::log_debug(&format!(
        "Route '{}' claimed {path} (reusable handler: {})",
        resolved.name,
        handler.is_reusable()
    ));
    let route = resolved.name.to_string();

    let mut ctx = HttpContext::new(HttpRequest {
        method: parts.method.clone(),
        path: path.to_string(),
        query,
    });
    handler.process(&mut ctx);

    let if_none_match = header_value(parts, "if-none-match");
    let response = into_response(ctx.response, http_config, if_none_match.as_deref()).await;
    (response, Some(route))
}

/// Percent-decode the request path; an undecodable path is matched as sent
fn decode_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or_else(|_| {
        logger::log_debug(&format!("Path {raw} is not valid UTF-8 once decoded"));
        Cow::Borrowed(raw)
    })
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(parts: &Parts, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = parts.headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Turn what the handler wrote into an HTTP response, applying host defaults
async fn into_response(
    response: HttpResponse,
    http_config: &HttpConfig,
    if_none_match: Option<&str>,
) -> Response<Full<Bytes>> {
    if let Some(file) = response.transmitted_file() {
        return static_files::transmit_file(file, if_none_match).await;
    }

    let status = response.status().unwrap_or(StatusCode::OK);
    let content_type = response
        .content_type()
        .unwrap_or(&http_config.default_content_type)
        .to_string();
    let body = response.into_body();

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            http::response::log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn build_access_entry(
    parts: &Parts,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    route: Option<String>,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = match parts.version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header_value(parts, "referer");
    entry.user_agent = header_value(parts, "user-agent");
    entry.route = route;
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
