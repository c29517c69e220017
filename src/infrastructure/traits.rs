//! Filesystem boundary used by the hierarchy service
//!
//! Record files are only ever read, so the trait covers reading and the
//! existence check done before it.

use std::io;
use std::path::Path;

/// Read access to record files.
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether `path` names a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_record_file_when_reading_then_returns_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("records.toml");
        std::fs::write(&path, "[[record]]\nid = \"a\"\n").unwrap();
        let fs = RealFileSystem;

        assert!(fs.is_file(&path));
        assert!(!fs.is_file(temp.path()));
        assert_eq!(fs.read_to_string(&path).unwrap(), "[[record]]\nid = \"a\"\n");
    }

    #[test]
    fn given_missing_file_when_reading_then_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = RealFileSystem.read_to_string(&path).unwrap_err();

        assert!(!RealFileSystem.is_file(&path));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
