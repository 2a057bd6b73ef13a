//! Request handler module
//!
//! Host side of request processing: dispatches each request through the
//! route table and turns the claiming handler's output into a response.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
