//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary files pass
/// through as (possibly mangled) text.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::filesystem(&e, "read", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read file contents, failing on invalid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::filesystem(&e, "read", path))
}

/// Overwrite a file with `content`.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::filesystem(&e, "write", path))
}

/// Rename `from` to `to`. Overwrite behavior is whatever the platform does.
pub fn rename_path(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| Error::filesystem(&e, "rename", from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_text_lossy_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_text_lossy(temp.path()).unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_text_lossy_replaces_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[b'o', b'k', 0xff, b'!']).unwrap();

        let content = read_text_lossy(temp.path()).unwrap();
        assert_eq!(content, "ok\u{fffd}!");
        assert!(read_file(temp.path()).is_err());
    }

    #[test]
    fn read_returns_filesystem_error_for_missing_file() {
        let err = read_text_lossy(Path::new("/nonexistent/path.txt")).unwrap_err();
        assert_eq!(err.code.as_str(), "filesystem.io_error");
        assert!(err.is_not_found());
    }

    #[test]
    fn write_file_succeeds_for_valid_path() {
        let temp = NamedTempFile::new().unwrap();
        write_file(temp.path(), "new content").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let err = write_file(Path::new("/nonexistent/dir/file.txt"), "content").unwrap_err();
        assert_eq!(err.code.as_str(), "filesystem.io_error");
    }

    #[test]
    fn rename_path_moves_and_reports_missing_source() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a");
        let to = dir.path().join("b");
        fs::write(&from, "x").unwrap();

        rename_path(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "x");

        let err = rename_path(&from, &to).unwrap_err();
        assert!(err.is_not_found());
    }
}
