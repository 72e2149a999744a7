//! Filesystem services the browser depends on.
//!
//! The controller never touches the filesystem itself. These traits are
//! implemented for the real disk by `tbrowse-fs` and by in-memory fakes in
//! tests.

use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::entry::EntryDetails;

/// Lists the raw names inside a directory, in enumeration order.
///
/// Names are returned as the OS reported them, so they may not be UTF-8.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// Describes one entry with display-ready labels.
///
/// Must not fail: unreadable entries get sentinel labels instead
/// (see [`EntryDetails::unreadable`]).
pub trait MetadataResolver {
    fn describe(&self, path: &Path) -> EntryDetails;
}

/// Decides whether a path can be entered.
pub trait PathClassifier {
    fn is_directory(&self, path: &Path) -> bool;
}

/// Everything the navigation controller needs from a filesystem.
pub trait FileSystem: DirectoryLister + MetadataResolver + PathClassifier {}

impl<T: DirectoryLister + MetadataResolver + PathClassifier> FileSystem for T {}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).list(path)
    }
}

impl<T: MetadataResolver + ?Sized> MetadataResolver for &T {
    fn describe(&self, path: &Path) -> EntryDetails {
        (**self).describe(path)
    }
}

impl<T: PathClassifier + ?Sized> PathClassifier for &T {
    fn is_directory(&self, path: &Path) -> bool {
        (**self).is_directory(path)
    }
}
