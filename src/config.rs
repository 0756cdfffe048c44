//! Server configuration
//!
//! Everything is a fixed constant except the bind port, which the `PORT`
//! environment variable overrides at process start.

use std::time::Duration;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the HTTP server.
///
/// Built once at startup and owned by the serve loop for the whole process
/// lifetime; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`host:port`).
    pub addr: String,
    /// Budget for reading a request body from the client.
    pub read_timeout: Duration,
    /// Deadline for producing and writing a response.
    pub write_timeout: Duration,
    /// How long a keep-alive connection may sit idle.
    pub idle_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: format!("0.0.0.0:{}", DEFAULT_PORT),
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the environment.
    ///
    /// A non-empty `PORT` replaces the default port verbatim. The value is
    /// not validated here; a non-numeric port surfaces as a bind error when
    /// the listener starts.
    pub fn from_env() -> Self {
        match std::env::var("PORT") {
            Ok(port) if !port.is_empty() => Self {
                addr: format!("0.0.0.0:{}", port),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
