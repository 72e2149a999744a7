//! Logging infrastructure for tbrowse.
//!
//! Installs a file-backed backend for the `log` facade. The screen belongs
//! to the browser while it runs, so every message goes to a log file that
//! is truncated at startup.

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// First line written to a fresh log file
pub const LOG_BANNER: &str = "=== tbrowse log start ===";

/// Parse a configured level name.
///
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Format one log line: `[HH:MM:SS] LEVEL: message`
pub fn format_line(timestamp: &str, level: Level, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{}] {}: {}", timestamp, level, message)
}

/// Logger writing to a single file.
#[derive(Debug)]
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
    path: PathBuf,
}

impl FileLogger {
    /// Create the log file (and its parent directory), truncating any
    /// previous content.
    pub fn create(path: &Path, level: LevelFilter) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        writeln!(file, "{}", LOG_BANNER)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        let line = format_line(&timestamp, record.level(), record.args());
        // A failing log write must never take the browser down
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger as the global `log` backend.
///
/// Must be called once at startup; later calls fail.
pub fn init(file_path: &Path, min_level: LevelFilter) -> Result<()> {
    let logger = FileLogger::create(file_path, min_level)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| anyhow::anyhow!("Logger already initialized: {}", e))?;
    log::set_max_level(min_level);
    Ok(())
}
