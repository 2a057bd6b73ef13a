//! HTTP server whose routing is an explicit, ordered route table.
//!
//! A custom `/show-id` route is registered ahead of every other route and
//! answers with `Recieved Id:<id>`; page routes map literal URLs to files on
//! disk; `api/message` is served by a controller built around an injected
//! message service.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
