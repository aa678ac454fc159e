//! Plain stdout/stderr logging helpers.
//!
//! Access-log lines follow the Common Log Format with a local timestamp.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Quote server started successfully");
    println!("Listening on: http://{addr}");
    println!("Quote file: {}", config.quotes.file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Random quote API -> http://{addr}/api/quote");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_warning(msg: &str) {
    eprintln!("[Warning] {msg}");
}

pub fn log_error(msg: &str) {
    eprintln!("[Error] {msg}");
}

pub fn log_access(peer_addr: &SocketAddr, method: &str, path: &str, status: u16, bytes: u64) {
    println!("{}", format_access(peer_addr, method, path, status, bytes));
}

/// Common Log Format:
/// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
fn format_access(peer_addr: &SocketAddr, method: &str, path: &str, status: u16, bytes: u64) -> String {
    format!(
        "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
        peer_addr.ip(),
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        status,
        bytes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_access() {
        let peer: SocketAddr = "192.168.1.1:54321".parse().unwrap();
        let line = format_access(&peer, "GET", "/api/quote", 200, 42);
        assert!(line.starts_with("192.168.1.1 - - ["));
        assert!(line.contains("\"GET /api/quote HTTP/1.1\""));
        assert!(line.ends_with("200 42"));
    }
}
