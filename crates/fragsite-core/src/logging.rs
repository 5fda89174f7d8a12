//! Tracing setup for the `fragsite` binary.
//!
//! Events go to `$XDG_STATE_HOME/fragsite/fragsite.log`. Stdout carries the
//! rendered page, so nothing is ever logged there; when the state directory
//! cannot be used, stderr takes the log instead.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info,fragsite=debug,fragsite_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `fragsite.log` in the XDG state dir; the directory is created if needed.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fragsite")?;
    Ok(xdg_dirs.place_state_file("fragsite.log")?)
}

/// Installs the global subscriber, appending to [`log_path`].
///
/// Errors leave no subscriber installed, so the caller can still fall back
/// to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
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
        .map_err(|e| anyhow::anyhow!("tracing init: {}", e))?;

    tracing::info!("logging to {}", path.display());
    Ok(())
}

/// Stderr-only subscriber. A subscriber that is already installed wins.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
