//! XDG Base Directory support for tbrowse.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "tbrowse";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/tbrowse` or `~/.config/tbrowse`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/tbrowse` or `~/.cache/tbrowse`. The log file
/// lives here unless the config points elsewhere.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}
