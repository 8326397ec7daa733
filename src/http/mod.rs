//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to terminate at a reverse proxy or the
//! orchestrator's ingress. The server drains connections gracefully on
//! SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
