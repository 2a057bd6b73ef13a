// API response utility functions module

use hyper::StatusCode;
use serde::Serialize;

use crate::logger;
use crate::routing::HttpResponse;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `body` as the JSON response
///
/// A serialization failure turns into a 500 with a JSON error body.
pub fn write_json<T: Serialize>(response: &mut HttpResponse, status: StatusCode, body: &T) {
    response.set_content_type(JSON_CONTENT_TYPE);
    match serde_json::to_string(body) {
        Ok(json) => {
            response.set_status(status);
            response.write(&json);
        }
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.write(r#"{"error":"Internal server error"}"#);
        }
    }
}
