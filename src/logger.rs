//! Logger module
//!
//! Plain-text logging helpers: informational and access lines go to stdout,
//! errors to stderr.

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Version};
use std::net::SocketAddr;

const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Audio file server started successfully");
    println!("Listening on: http://{addr}");
    println!("Serving files from: {}", config.server.root);
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Log a completed request in common-log style:
/// `remote - - [time] "METHOD /path HTTP/1.1" status bytes`
pub fn log_access(
    peer_addr: &SocketAddr,
    method: &Method,
    path: &str,
    version: Version,
    status: u16,
    body_bytes: u64,
) {
    println!(
        "{} - - [{}] \"{} {} {:?}\" {} {}",
        peer_addr.ip(),
        Local::now().format(TIME_FORMAT),
        method,
        path,
        version,
        status,
        body_bytes,
    );
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
