//! Tracing setup.

use crate::config::Settings;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they don't interfere with the TUI.
///
/// `RUST_LOG` wins over the configured filter. Once a global subscriber is
/// installed, later calls return without touching any file.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let log_file = std::fs::File::create(settings.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!(log_file = %settings.log_file().display(), "Tracing initialized");
    Ok(())
}
