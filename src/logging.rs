//! Tracing setup. The terminal UI owns stdout, so events go to a log file.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global `fmt` subscriber writing to `config.file`.
///
/// `RUST_LOG` overrides `config.filter`. Calling this twice is harmless; the
/// second subscriber is silently dropped.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let log_file = File::create(&config.file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
