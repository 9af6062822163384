//! Local filesystem writer.

use std::io::{self, Write};
use std::path::Path;

use storegen_core::{
    application::{ApplicationError, ports::ArtifactWriter},
    error::{StoregenError, StoregenResult},
};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Production writer backed by the local disk.
///
/// Content is written to a temporary file next to the target and then moved
/// into place without replacing anything, so the target either does not
/// exist or holds the complete content.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem writer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactWriter for LocalFilesystem {
    #[instrument(skip(self, content), fields(path = %path.display(), bytes = content.len()))]
    fn create_new(&self, path: &Path, content: &str) -> StoregenResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        std::fs::create_dir_all(dir).map_err(|e| map_io_error(dir, e, "create directory"))?;

        let mut staged =
            NamedTempFile::new_in(dir).map_err(|e| map_io_error(dir, e, "create temporary file"))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        staged.persist_noclobber(path).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                StoregenError::from(ApplicationError::Collision {
                    path: path.to_path_buf(),
                })
            } else {
                map_io_error(path, e.error, "move file into place")
            }
        })?;

        debug!("File created");
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StoregenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
