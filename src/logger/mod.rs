//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Server lifecycle logging
//! - Route registration and resolution logging
//! - Access logging with multiple formats
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

/// Debug lines are dropped unless `logging.level = "debug"`
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    DEBUG_ENABLED.store(
        config.logging.level.eq_ignore_ascii_case("debug"),
        Ordering::Relaxed,
    );
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Write to info log
fn write_info(message: &str) {
    let line = format!("{} {message}", timestamp());
    match writer::get() {
        Some(w) => w.write_info(&line),
        None => println!("{line}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    let line = format!("{} {message}", timestamp());
    match writer::get() {
        Some(w) => w.write_error(&line),
        None => eprintln!("{line}"),
    }
}

/// Write to access log specifically (entries carry their own timestamp)
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_debug(message: &str) {
    if is_debug_enabled() {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_route_registered(index: usize, name: &str) {
    write_info(&format!("[Route] #{index} {name}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("[Shutdown] {reason}, no longer accepting connections"));
}
