// Console logging helpers
// Access log goes to stdout, warnings and errors to stderr

use crate::config::AppState;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("devserve is running");
    println!("Serving directory: {}", state.root().display());
    println!(
        "Open your browser and navigate to http://localhost:{}",
        state.config.server.port
    );
    println!("Listening on: http://{addr}");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

/// Format one access log line
pub fn format_access(method: &Method, path: &str, status: u16, size: usize) -> String {
    format!("[{}] {method} {path} {status} {size}B", timestamp())
}

pub fn log_access(method: &Method, path: &str, status: u16, size: usize) {
    println!("{}", format_access(method, path, status, size));
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down");
}

pub fn log_shutdown() {
    println!("[Shutdown] Listener closed, exiting");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to bind {addr}: {err}");
    eprintln!("        The port may be in use or require elevated privileges");
}
