//! moikka - a minimal greeting service
//!
//! Serves a fixed greeting on `/` and a liveness payload on `/health`,
//! and shuts down gracefully on SIGTERM/SIGINT with a bounded drain.

pub mod config;
pub mod server;
