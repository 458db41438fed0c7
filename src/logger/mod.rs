//! Logger module
//!
//! Provides logging utilities for the blog API server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging with a configurable level
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use serde::Deserialize;
use std::net::SocketAddr;

use crate::config::Config;
use crate::data::LoadError;

/// Severity threshold, from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    /// Whether a message at `level` passes this threshold
    pub fn allows(self, level: Self) -> bool {
        level <= self
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: Level) -> bool {
    let threshold = if writer::is_initialized() {
        writer::get().level()
    } else {
        Level::Info
    };
    threshold.allows(level)
}

/// Write to info log
fn write_info(message: &str) {
    if !enabled(Level::Info) {
        return;
    }
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
///
/// Access lines are governed by `logging.access_log`, not by the level.
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Blog API server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Posts file: {}", config.data.posts_file));
    write_info(&format!("Comments file: {}", config.data.comments_file));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        write_info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(Level::Debug) {
        write_info(&format!("[Connection] Accepted from: {peer_addr}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(Level::Error, &format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(Level::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(Level::Warn, &format!("[WARN] {message}"));
}

/// Source documents could not be read; the client only sees a 500
pub fn log_load_failure(err: &LoadError) {
    log_error(&format!("[Data] {err}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown_requested(signal: &str) {
    write_info(&format!("[Signal] {signal} received, shutting down"));
}

pub fn log_shutdown() {
    write_info("[Shutdown] Listener closed, in-flight connections finish in background");
}
