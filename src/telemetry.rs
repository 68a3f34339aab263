//! Logging initialization.
//!
//! Sets up tracing-subscriber with an `EnvFilter` and a stdout fmt
//! layer, plus an append-mode file layer when a log path is given.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Initialize logging to stdout and, optionally, an append-mode file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber was already set.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    Error::Other(format!("failed to open log file {}: {e}", path.display()))
                })?;
            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file));

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))?;
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))?;
        }
    }

    Ok(())
}
