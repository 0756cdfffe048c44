use moikka::config::ServerConfig;
use moikka::server::{run_server, shutdown_channel, wait_for_signal};
use std::time::Duration;
use tracing::{error, info};

/// Bound on how long shutdown waits for in-flight requests to drain.
const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting moikka greeting service");

    let config = ServerConfig::from_env();

    // Create shutdown channel for coordinated shutdown
    let (shutdown_controller, shutdown_signal) = shutdown_channel();

    // Serve in the background; the main task only waits for signals
    let mut server = tokio::spawn(run_server(config, shutdown_signal));

    tokio::select! {
        res = &mut server => {
            // The serve loop never returns on its own, so reaching this arm
            // means the listener died with no shutdown requested. A service
            // with a dead listener has nothing left to do.
            let err = match res {
                Ok(Err(e)) => anyhow::Error::new(e),
                Ok(Ok(())) => anyhow::anyhow!("serve loop returned without a shutdown request"),
                Err(e) => anyhow::Error::new(e),
            };
            error!(error = %err, "Server failed");
            return Err(err);
        }
        signal = wait_for_signal() => {
            info!(signal = signal, "Initiating graceful shutdown");
        }
    }

    // Stop accepting new connections and drain in-flight requests, bounded
    // by the shutdown deadline. Once requested, shutdown cannot be aborted.
    shutdown_controller.shutdown();

    match tokio::time::timeout(SHUTDOWN_DEADLINE, server).await {
        Ok(Ok(Ok(()))) => {
            info!("Server stopped");
            Ok(())
        }
        Ok(Ok(Err(e))) => {
            error!(error = %e, "Server failed during shutdown");
            Err(e.into())
        }
        Ok(Err(e)) => {
            error!(error = %e, "Server task failed during shutdown");
            Err(e.into())
        }
        Err(_) => {
            // In-flight requests still outstanding at the deadline are
            // abandoned when the runtime drops.
            error!(
                deadline_secs = SHUTDOWN_DEADLINE.as_secs(),
                "Graceful shutdown deadline exceeded"
            );
            Err(anyhow::anyhow!(
                "graceful shutdown did not complete within {}s",
                SHUTDOWN_DEADLINE.as_secs()
            ))
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
