//! Configuration structures for tbrowse settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory browser settings
    #[serde(default)]
    pub browser: BrowserSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Directory browser settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Number of entries the listing can hold before it has to grow
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Entries whose name starts with this prefix are hidden
    /// (empty string shows everything)
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,

    /// Maximum displayed width of an entry name in the detailed view
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    /// Minimum width to display extended columns (size, time, kind)
    #[serde(default = "default_extended_view_width")]
    pub extended_view_width: usize,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional, defaults to the cache directory)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_initial_capacity() -> usize {
    defaults::INITIAL_CAPACITY
}

fn default_hidden_prefix() -> String {
    defaults::HIDDEN_PREFIX.to_string()
}

fn default_name_width() -> usize {
    defaults::NAME_WIDTH
}

fn default_extended_view_width() -> usize {
    defaults::EXTENDED_VIEW_WIDTH
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            hidden_prefix: default_hidden_prefix(),
            name_width: default_name_width(),
            extended_view_width: default_extended_view_width(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
