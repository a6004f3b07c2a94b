//! tracing subscriber setup.

use crate::config::LogConfig;
use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "QWERTYPE_LOG";

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber.
///
/// Logs go to the configured file, else to stderr when `stderr_fallback` is
/// set. With neither, logging stays off.
pub fn init(config: &LogConfig, stderr_fallback: bool) -> Result<()> {
    let filter = env_filter(config);
    let result = if let Some(path) = config.file.as_ref() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .try_init()
    } else if stderr_fallback {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        return Ok(());
    };
    result.map_err(|e| AppError::Logging(e.to_string()))
}
