//! In-memory writer for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use storegen_core::{
    application::{ApplicationError, ports::ArtifactWriter},
    error::StoregenResult,
};

/// In-memory writer with the same create-exclusive rule as the disk.
///
/// Clones share state, so a test can hand one clone to a service and keep
/// another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing whatever was there.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_ancestors(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Mark `path` and its ancestors as existing directories.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(path.as_ref());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl ArtifactWriter for MemoryFilesystem {
    fn create_new(&self, path: &Path, content: &str) -> StoregenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::WriterLockError)?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::Collision {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            inner.add_ancestors(parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}
