//! Greeting and health endpoints
//!
//! - `GET /` - Fixed greeting, any other method is rejected with 405
//! - `/health` - Liveness payload `{"status":"ok"}`, method is ignored

use crate::config::ServerConfig;
use crate::server::shutdown::ShutdownSignal;
use axum::{
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Greeting served from `/`.
const GREETING: &str = "Hello from Go! 🎯";

/// Liveness payload, built fresh for every `/health` request.
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Greeting handler
///
/// Only GET produces the greeting; every other method gets a 405 with a
/// plain-text body and no other effect.
async fn greeting(method: Method) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response();
    }
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], GREETING).into_response()
}

/// Health probe handler
///
/// Responds 200 with the serialized payload regardless of request method.
async fn health() -> Response {
    let payload = Health { status: "ok" };
    let mut body = serde_json::to_string(&payload).unwrap_or_else(|e| {
        // Unreachable for a static payload; the response stays 200 either way.
        warn!(error = %e, "Failed to encode health payload");
        String::new()
    });
    body.push('\n');
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}

/// Build the router for the greeting and health endpoints
///
/// Exactly two routes; anything else falls through to the router's 404.
fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", any(greeting))
        .route("/health", any(health))
        .layer(TimeoutLayer::new(config.write_timeout))
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Run the greeting server until shutdown is requested
///
/// Binds the configured address and serves `/` and `/health`. Once the
/// shutdown signal fires the listener stops accepting and in-flight
/// requests drain; the caller bounds the drain with its own deadline.
///
/// # Arguments
/// * `config` - Bind address and timeouts, owned for the server lifetime
/// * `shutdown` - Signal that stops the serve loop
///
/// # Returns
/// `Ok(())` after a clean drain, or the bind/serve error. A malformed
/// address (e.g. a non-numeric `PORT` passed through) surfaces here as a
/// bind error.
pub async fn run_server(
    config: ServerConfig,
    mut shutdown: ShutdownSignal,
) -> Result<(), std::io::Error> {
    let app = build_router(&config);

    let listener = TcpListener::bind(config.addr.as_str()).await?;
    // Log after successful bind - server is actually listening
    info!(addr = %config.addr, "Greeting server listening (HTTP)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.wait().await })
        .await
}
