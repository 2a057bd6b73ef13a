//! HTTP protocol layer module
//!
//! Protocol helpers shared by the host and route handlers: query decoding,
//! MIME detection, conditional requests and host-level responses.

pub mod cache;
pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::QueryParams;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_options_response, finalize_response,
};
