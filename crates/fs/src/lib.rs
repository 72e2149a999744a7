//! Local filesystem services for tbrowse.
//!
//! [`LocalFs`] implements the directory lister, metadata resolver and path
//! classifier used by the navigation controller. The label formatting it
//! relies on lives in [`format`] and [`kind`].

pub mod format;
pub mod kind;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tbrowse_core::entry::{EntryDetails, LABEL_UNKNOWN, SIZE_DIRECTORY};
use tbrowse_core::{DirectoryLister, MetadataResolver, PathClassifier};

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalFs {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let read_dir = fs::read_dir(path)?;
        let mut names = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                // Entry vanished or is unreadable mid-scan
                Err(err) => log::debug!("Skipping entry in {}: {}", path.display(), err),
            }
        }
        Ok(names)
    }
}

impl MetadataResolver for LocalFs {
    fn describe(&self, path: &Path) -> EntryDetails {
        // Use symlink_metadata so links are reported as links
        let link_metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                log::debug!("Cannot stat {}: {}", path.display(), err);
                return EntryDetails::unreadable();
            }
        };

        // Size follows the link target when there is one
        let target = fs::metadata(path).unwrap_or_else(|_| link_metadata.clone());
        let size = if target.is_dir() {
            SIZE_DIRECTORY.to_string()
        } else {
            format::format_size(target.len())
        };

        let modified = link_metadata
            .modified()
            .ok()
            .map(format::format_modified_time)
            .unwrap_or_else(|| LABEL_UNKNOWN.to_string());

        EntryDetails::new(size, modified, kind::classify(path, &link_metadata))
    }
}

impl PathClassifier for LocalFs {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
