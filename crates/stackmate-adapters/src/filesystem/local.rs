//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use stackmate_core::{application::ports::Filesystem, error::StackmateResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackmateResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StackmateResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> StackmateResult<Vec<PathBuf>> {
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        // read_dir order is platform-dependent; sort for deterministic
        // frontend detection.
        dirs.sort();
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stackmate_core::error::StackmateError {
    use stackmate_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("backend");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap(); // second create must not fail
        assert!(dir.is_dir());
    }

    #[test]
    fn recreating_a_dir_leaves_existing_files_alone() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("backend");

        fs.create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("notes.txt"), "keep me").unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.join("notes.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn write_file_overwrites_previous_content() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("main.py");

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn list_dirs_excludes_files_and_sorts() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        std::fs::create_dir(temp.path().join("zeta")).unwrap();
        std::fs::create_dir(temp.path().join("alpha")).unwrap();
        std::fs::write(temp.path().join("file.txt"), "x").unwrap();

        let dirs = fs.list_dirs(temp.path()).unwrap();
        assert_eq!(
            dirs,
            vec![temp.path().join("alpha"), temp.path().join("zeta")]
        );
    }

    #[test]
    fn list_dirs_on_missing_path_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.list_dirs(&temp.path().join("nope")).is_err());
    }
}
