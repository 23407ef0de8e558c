//! Local filesystem adapter using std::fs.

use std::path::Path;

use kiln_core::{application::ports::Filesystem, error::KilnResult};
use tracing::trace;

use super::map_io_error;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::{application::ApplicationError, error::KilnError};
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes_a_tree() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("a/b");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("x.txt"), "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(dir.join("x.txt")).unwrap(), "hello\n");

        fs.remove_dir_all(&temp.path().join("a")).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn write_into_missing_dir_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem
            .write_file(&temp.path().join("missing/x.txt"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
