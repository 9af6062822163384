//! Planning writer for `--dry-run`.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use storegen_core::{
    application::{ApplicationError, ports::ArtifactWriter},
    error::StoregenResult,
};
use tracing::info;

/// Writer that records what would be created and touches nothing.
///
/// Collisions are checked against the real filesystem and against paths
/// already planned earlier in the same run, so a dry run fails exactly
/// where a real run would.
#[derive(Debug, Clone, Default)]
pub struct DryRunFilesystem {
    planned: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl DryRunFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths that would have been written, sorted.
    pub fn planned(&self) -> Vec<PathBuf> {
        self.planned
            .lock()
            .map(|planned| planned.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl ArtifactWriter for DryRunFilesystem {
    fn create_new(&self, path: &Path, content: &str) -> StoregenResult<()> {
        let mut planned = self
            .planned
            .lock()
            .map_err(|_| ApplicationError::WriterLockError)?;

        if path.exists() || planned.contains(path) {
            return Err(ApplicationError::Collision {
                path: path.to_path_buf(),
            }
            .into());
        }

        info!(path = %path.display(), bytes = content.len(), "Would create file");
        planned.insert(path.to_path_buf());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
