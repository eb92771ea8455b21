//! FileSystem port - abstraction over the file I/O the post-install step needs
//!
//! The dependency locator only probes for existence; the materializer writes
//! generated content and copies located files. Keeping both behind one trait
//! lets tests inject failures without touching the disk.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Write content to a file atomically. The parent directory must exist.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Copy a file verbatim. The destination directory must exist.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, Vec<u8>>>>,
    pub dirs: std::sync::Arc<std::sync::Mutex<std::collections::HashSet<std::path::PathBuf>>>,
    pub fail_on: std::sync::Arc<std::sync::Mutex<std::collections::HashSet<std::path::PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file; its parent counts as an existing directory.
    pub fn with_file(self, path: impl Into<std::path::PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, content.as_bytes().to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    /// Make any write or copy targeting `path` fail.
    pub fn failing_on(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.fail_on.lock().unwrap().insert(path.into());
        self
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn check_target(&self, path: &Path) -> io::Result<()> {
        if self.fail_on.lock().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.dirs.lock().unwrap().contains(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.check_target(path)?;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        let content = self
            .files
            .lock()
            .unwrap()
            .get(from)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "source not found"))?;
        self.write(to, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mock_write_requires_parent_dir() {
        let fs = MockFileSystem::new();
        let err = fs.write(Path::new("/www/a.js"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let fs = fs.with_dir("/www");
        fs.write(Path::new("/www/a.js"), b"x").unwrap();
        assert_eq!(fs.read(Path::new("/www/a.js")).as_deref(), Some("x"));
    }

    #[test]
    fn mock_copy_duplicates_content() {
        let fs = MockFileSystem::new()
            .with_file("/nm/firebase-app.js", "app")
            .with_dir("/www");
        fs.copy(
            &PathBuf::from("/nm/firebase-app.js"),
            &PathBuf::from("/www/firebase-app.js"),
        )
        .unwrap();
        assert!(fs.exists(Path::new("/www/firebase-app.js")));
    }
}
