//! HTTP server for the greeting and health endpoints
//!
//! - `/` - Fixed greeting (GET only)
//! - `/health` - Liveness payload for external monitoring
//!
//! Also provides graceful shutdown handling for SIGTERM/SIGINT.

mod routes;
pub mod shutdown;

pub use routes::run_server;
pub use shutdown::{shutdown_channel, wait_for_signal, ShutdownController, ShutdownSignal};

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_tests;

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod shutdown_tests;
