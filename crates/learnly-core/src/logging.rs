//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/learnly/logs/`. The TUI owns the
/// terminal while running, so nothing is ever written to stdout or stderr.
/// Log level is controlled by the `LEARNLY_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LEARNLY_LOG=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "learnly.log");

    // Default to info, allow override via LEARNLY_LOG
    let env_filter =
        EnvFilter::try_from_env("LEARNLY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::info!("Learnly starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("learnly").join("logs")
}
