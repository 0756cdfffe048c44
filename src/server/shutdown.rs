//! Graceful shutdown handling for the greeting service
//!
//! A one-slot watch channel connects the main task to the serve loop: the
//! main task requests shutdown after a termination signal, the serve loop
//! stops accepting and drains in-flight requests.

use tokio::sync::watch;
use tracing::info;

/// Receiving half of the shutdown channel.
///
/// Cloned into every task that must stop when shutdown is requested.
#[derive(Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Wait until shutdown is requested.
    pub async fn wait(&mut self) {
        // A dropped controller also counts as shutdown.
        let _ = self.receiver.wait_for(|requested| *requested).await;
    }

    /// Check whether shutdown was requested (non-blocking).
    pub fn is_shutdown(&self) -> bool {
        *self.receiver.borrow()
    }
}

/// Sending half of the shutdown channel.
pub struct ShutdownController {
    sender: watch::Sender<bool>,
}

impl ShutdownController {
    /// Request shutdown. Idempotent; wakes every signal clone.
    pub fn shutdown(&self) {
        let _ = self.sender.send(true);
        info!("Shutdown signal sent");
    }
}

/// Create a connected controller/signal pair
///
/// The controller triggers shutdown; the signal is cloned into the tasks
/// that need to observe it.
pub fn shutdown_channel() -> (ShutdownController, ShutdownSignal) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownController { sender }, ShutdownSignal { receiver })
}

/// Wait for SIGTERM or SIGINT
///
/// Suspends until a termination signal arrives and returns its name.
///
/// # Panics
/// Panics if signal handlers cannot be registered (OS resource exhaustion).
#[cfg(unix)]
pub async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("cannot register SIGTERM handler");
    let mut sigint =
        signal(SignalKind::interrupt()).expect("cannot register SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM");
            "SIGTERM"
        }
        _ = sigint.recv() => {
            info!("Received SIGINT");
            "SIGINT"
        }
    }
}

/// Wait for Ctrl+C (non-unix)
///
/// # Panics
/// Panics if the Ctrl+C handler cannot be registered.
#[cfg(not(unix))]
pub async fn wait_for_signal() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("cannot wait for Ctrl+C");
    info!("Received Ctrl+C");
    "CTRL_C"
}
