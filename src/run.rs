//! Application execution logic.
//!
//! This module builds the display widget and drives it: a single refresh in
//! `--once` mode, otherwise a periodic refresh task that runs until a
//! shutdown signal arrives.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::signal;
use tokio::task::JoinError;

use showip::config::ValidatedConfig;
use showip::display::{DisplaySink, WriterSink};
use showip::network::AddressFetcher;
use showip::network::platform::PlatformFetcher;
use showip::widget::{Widget, WidgetFactory};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The refresh task panicked or was aborted.
    #[error("Refresh task failed: {0}")]
    TaskFailed(#[source] JoinError),
}

/// Runtime options extracted from validated config.
#[derive(Debug, Clone, Copy)]
struct RuntimeOptions {
    interval: Duration,
    once: bool,
    changes_only: bool,
}

impl From<&ValidatedConfig> for RuntimeOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            interval: config.interval,
            once: config.once,
            changes_only: config.changes_only,
        }
    }
}

/// Executes the application.
///
/// # Errors
///
/// Returns an error if the refresh task fails.
///
/// # Coverage Note
///
/// Excluded from coverage - requires platform APIs and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let options = RuntimeOptions::from(&config);

    let mut factory = WidgetFactory::new();
    let widget = factory.create(PlatformFetcher::new(), WriterSink::stdout(config.format));

    drive(widget, options, shutdown_signal()).await
}

/// Drives a widget according to the runtime options.
///
/// In `once` mode the widget refreshes a single time and `shutdown` is never
/// awaited. Otherwise the widget is spawned and cancelled when `shutdown`
/// completes.
async fn drive<F, S>(
    mut widget: Widget<F, S>,
    options: RuntimeOptions,
    shutdown: impl Future<Output = ()>,
) -> Result<(), RunError>
where
    F: AddressFetcher + Unpin + 'static,
    S: DisplaySink + 'static,
{
    if options.once {
        let result = widget.refresh();
        tracing::debug!("Single refresh: {result}");
        return Ok(());
    }

    tracing::info!(
        "Refreshing every {}s{}",
        options.interval.as_secs(),
        if options.changes_only {
            " (changes only)"
        } else {
            ""
        }
    );

    let handle = widget.spawn(options.interval, options.changes_only);

    shutdown.await;
    tracing::info!("Shutdown signal received, stopping...");

    handle.cancel().await.map_err(RunError::TaskFailed)
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
