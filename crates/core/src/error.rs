//! Error types for the browser core.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the entry store and the navigation controller.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The entry store could not grow its backing storage.
    #[error("failed to grow entry store to {requested} entries")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// An index outside `0..len` was passed to the entry store.
    #[error("index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },

    /// A directory could not be listed.
    #[error("failed to read directory {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BrowserError {
    /// Whether the browser can keep running after this error.
    ///
    /// Only an allocation failure takes the entry container down with it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BrowserError::Allocation { .. })
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
