// Server module entry point
// Listener binding, accept loop, per-connection serving, shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), so alias it
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::bind_listener;
pub use server_loop::run;
pub use signal::{start_signal_handler, SignalHandler};
