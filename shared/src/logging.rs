//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install a global `tracing` subscriber
///
/// `RUST_LOG` overrides `config.level` when present. Returns an error if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| format!("Invalid log filter '{}': {}", config.level, e))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        event = "logging_initialized",
        "Logging initialized"
    );
    Ok(())
}
