use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

/// Default log directory under the platform's local data dir
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordsearch")
        .join("logs")
}

/// Send tracing output to a daily log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or stderr.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "wordsearch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")?;

    Ok(guard)
}
