//! Directory entry records.

use std::ffi::{OsStr, OsString};

/// Name of the synthetic entry that leads to the parent directory.
pub const PARENT_NAME: &str = "..";

/// Maximum length (in characters) of the size label.
pub const SIZE_WIDTH: usize = 8;
/// Maximum length (in characters) of the modification time label.
pub const MODIFIED_WIDTH: usize = 24;
/// Maximum length (in characters) of the kind label.
pub const KIND_WIDTH: usize = 16;

/// Size label used for directories.
pub const SIZE_DIRECTORY: &str = "DIR";
/// Kind label used for directories, including `..`.
pub const KIND_DIRECTORY: &str = "Directory";
/// Label used when metadata could not be read.
pub const LABEL_ERROR: &str = "Error";
/// Label used when a value is not known.
pub const LABEL_UNKNOWN: &str = "Unknown";

/// Pre-formatted description of one entry, as produced by a
/// [`MetadataResolver`](crate::MetadataResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetails {
    pub size: String,
    pub modified: String,
    pub kind: String,
}

impl EntryDetails {
    pub fn new(
        size: impl Into<String>,
        modified: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            modified: modified.into(),
            kind: kind.into(),
        }
    }

    /// Sentinel description for an entry whose metadata could not be read
    pub fn unreadable() -> Self {
        Self::new(LABEL_ERROR, LABEL_UNKNOWN, LABEL_UNKNOWN)
    }
}

/// One row of a directory listing.
///
/// Built once from a raw name and its description; the labels are cut to
/// their column widths at construction so every entry has the same shape.
/// The name is kept whole since it is needed to build child paths; the
/// renderer truncates it for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    /// Name as the filesystem reported it, used to build child paths
    raw_name: OsString,
    size: String,
    modified: String,
    kind: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, details: EntryDetails) -> Self {
        let name = name.into();
        Self::with_names(OsString::from(&name), name, details)
    }

    /// Entry for a name that may not be valid UTF-8; the display name
    /// replaces invalid sequences with `U+FFFD`.
    pub fn from_os_name(raw_name: OsString, details: EntryDetails) -> Self {
        let name = raw_name.to_string_lossy().into_owned();
        Self::with_names(raw_name, name, details)
    }

    fn with_names(raw_name: OsString, name: String, details: EntryDetails) -> Self {
        Self {
            name,
            raw_name,
            size: truncate_chars(&details.size, SIZE_WIDTH),
            modified: truncate_chars(&details.modified, MODIFIED_WIDTH),
            kind: truncate_chars(&details.kind, KIND_WIDTH),
        }
    }

    /// The synthetic `..` entry placed at the top of every listing
    pub fn parent() -> Self {
        Self::new(
            PARENT_NAME,
            EntryDetails::new(SIZE_DIRECTORY, "", KIND_DIRECTORY),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_name(&self) -> &OsStr {
        &self.raw_name
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn modified(&self) -> &str {
        &self.modified
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_parent(&self) -> bool {
        self.name == PARENT_NAME
    }
}

/// Keep at most `max_len` characters of `text`.
pub fn truncate_chars(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_bounded() {
        let entry = Entry::new(
            "report.txt",
            EntryDetails::new(
                "123456789 MB",
                "Wednesday, 2024-01-10 12:30:45",
                "Very long kind label here",
            ),
        );
        assert_eq!(entry.size(), "12345678");
        assert_eq!(entry.modified().chars().count(), MODIFIED_WIDTH);
        assert_eq!(entry.kind(), "Very long kind l");
        assert_eq!(entry.name(), "report.txt");
    }

    #[test]
    fn test_parent_entry() {
        let parent = Entry::parent();
        assert!(parent.is_parent());
        assert_eq!(parent.size(), SIZE_DIRECTORY);
        assert_eq!(parent.kind(), KIND_DIRECTORY);

        let file = Entry::new("a", EntryDetails::unreadable());
        assert!(!file.is_parent());
        assert_eq!(file.size(), LABEL_ERROR);
        assert_eq!(file.kind(), LABEL_UNKNOWN);
    }

    #[test]
    fn test_names_are_kept_whole() {
        let long = "a-very-long-file-name-that-exceeds-any-column.txt";
        let entry = Entry::new(long, EntryDetails::unreadable());
        assert_eq!(entry.name(), long);
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_name_survives_invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"caf\xE9").to_os_string();
        let entry = Entry::from_os_name(raw.clone(), EntryDetails::unreadable());
        assert_eq!(entry.raw_name(), raw.as_os_str());
        assert_eq!(entry.name(), "caf\u{FFFD}");
    }

    #[test]
    fn test_new_keeps_raw_name_in_sync() {
        let entry = Entry::new("src", EntryDetails::unreadable());
        assert_eq!(entry.raw_name(), OsStr::new("src"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("日本語", 2), "日本");
        assert_eq!(truncate_chars("ab", 5), "ab");
    }
}
