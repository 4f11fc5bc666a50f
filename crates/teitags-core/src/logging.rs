//! Logging init: append to a file in the XDG state dir, or to stderr.
//!
//! Filter directives come from `TEITAGS_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_DIRECTIVES`].

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVES: &str = "info,teitags=debug,teitags_core=debug";

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "TEITAGS_LOG";

/// Path of the log file, `~/.local/state/teitags/teitags.log`. Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("teitags")?;
    xdg_dirs
        .place_state_file("teitags.log")
        .context("create log directory")
}

/// Pick filter directives: first non-empty of `primary`, `fallback`, then the default.
fn directives(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .into_iter()
        .chain(fallback)
        .find(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

fn env_filter() -> EnvFilter {
    let wanted = directives(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    EnvFilter::try_new(&wanted).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a file-backed subscriber and return the log path.
/// Errors (unwritable state dir, subscriber already set) let the caller fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "teitags logging initialized");
    Ok(path)
}

/// Log to stderr only. Used when [`init_logging`] fails so the CLI still runs.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
