//! Category labels for the kind column.

use std::fs::Metadata;
use std::path::Path;

use tbrowse_core::entry::KIND_DIRECTORY;

pub const KIND_SYMLINK: &str = "Symlink";
pub const KIND_SPECIAL: &str = "Special";
pub const KIND_EXECUTABLE: &str = "Executable";
pub const KIND_FILE: &str = "File";

/// Classify an entry from its (non-followed) metadata and its name.
///
/// The executable bit wins over the extension, so `build.sh` with mode
/// 0755 is an executable while a plain `build.sh` is source code.
pub fn classify(path: &Path, metadata: &Metadata) -> &'static str {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        return KIND_SYMLINK;
    }
    if file_type.is_dir() {
        return KIND_DIRECTORY;
    }
    if !file_type.is_file() {
        // Sockets, fifos, block and character devices
        return KIND_SPECIAL;
    }

    if is_executable(metadata) {
        return KIND_EXECUTABLE;
    }

    kind_for_extension(path).unwrap_or(KIND_FILE)
}

/// Kind label for well-known file extensions
pub fn kind_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let kind = match ext.as_str() {
        "txt" | "log" | "md" | "conf" | "cfg" | "ini" | "toml" | "yaml" | "yml" | "json"
        | "xml" | "csv" | "properties" | "env" => "Text file",
        "rs" | "c" | "h" | "cpp" | "hpp" | "py" | "js" | "ts" | "go" | "java" | "rb" | "php"
        | "sh" | "bash" | "hs" | "nix" | "html" | "css" => "Source code",
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "ico" => "Image",
        "mp3" | "wav" | "flac" | "ogg" | "m4a" => "Audio",
        "mp4" | "mkv" | "avi" | "mov" | "webm" => "Video",
        "zip" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "zst" | "7z" | "rar" => "Archive",
        "pdf" | "doc" | "docx" | "odt" | "xls" | "xlsx" | "ppt" | "pptx" => "Document",
        _ => return None,
    };
    Some(kind)
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_for_extension() {
        assert_eq!(kind_for_extension(Path::new("main.rs")), Some("Source code"));
        assert_eq!(kind_for_extension(Path::new("README.MD")), Some("Text file"));
        assert_eq!(kind_for_extension(Path::new("photo.JPG")), Some("Image"));
        assert_eq!(kind_for_extension(Path::new("backup.tar.gz")), Some("Archive"));
        assert_eq!(kind_for_extension(Path::new("Makefile")), None);
        assert_eq!(kind_for_extension(Path::new("data.bin")), None);
    }

    #[test]
    fn test_classify_plain_file_and_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.bin");
        fs::write(&file, [0u8; 4]).unwrap();

        let metadata = fs::symlink_metadata(&file).unwrap();
        assert_eq!(classify(&file, &metadata), KIND_FILE);

        let metadata = fs::symlink_metadata(temp_dir.path()).unwrap();
        assert_eq!(classify(temp_dir.path(), &metadata), KIND_DIRECTORY);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("run");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let metadata = fs::symlink_metadata(&script).unwrap();
        assert_eq!(classify(&script, &metadata), KIND_EXECUTABLE);
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit_beats_extension() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();

        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
        let metadata = fs::symlink_metadata(&script).unwrap();
        assert_eq!(classify(&script, &metadata), "Source code");

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        let metadata = fs::symlink_metadata(&script).unwrap();
        assert_eq!(classify(&script, &metadata), KIND_EXECUTABLE);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_special() {
        use std::os::unix::net::UnixListener;

        let temp_dir = TempDir::new().unwrap();
        let socket = temp_dir.path().join("sock");
        let _listener = UnixListener::bind(&socket).unwrap();

        let metadata = fs::symlink_metadata(&socket).unwrap();
        assert_eq!(classify(&socket, &metadata), KIND_SPECIAL);
    }
}
