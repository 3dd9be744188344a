//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout/stderr, so interactive sessions log to a file
//! in a per-session directory. Script mode logs to stderr, leaving stdout for
//! JSON snapshots.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Installs a file-backed subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn setup_file_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let log_dir = config.log_dir.clone().unwrap_or_else(log_dir);
    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "scorekeeper.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/scorekeeper.log", session_log_dir.display());

    Ok(guard)
}

/// Installs a stderr subscriber for non-interactive use.
pub fn setup_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/scorekeeper/logs`
/// - Linux: `~/.cache/scorekeeper/logs` (or `$XDG_CACHE_HOME/scorekeeper/logs`)
/// - Windows: `%LOCALAPPDATA%\scorekeeper\logs`
/// - Fallback: `/tmp/scorekeeper/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scorekeeper")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/scorekeeper"))
        .join("logs")
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
