//! File-only tracing setup.
//!
//! The terminal belongs to the game while it runs, so nothing is written to
//! stdout or stderr. Each session logs to `<log_dir>/session_<unix-secs>/xzap.log`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "xzap.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the background writer on drop; keep it alive
/// until the process is about to exit.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let base_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let session_log_dir = base_dir.join(format!("session_{timestamp}"));
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(
        "Log file: {}",
        session_log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// Like [`setup_logging`], but a failure only costs the log file.
///
/// The game itself does not depend on logging, so an unusable log directory
/// is reported on stderr before the terminal is taken over and play goes on.
pub fn try_setup_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    match setup_logging(log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    }
}

/// Platform cache directory, e.g. `~/.cache/xzap/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "xzap")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}
