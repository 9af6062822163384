//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `storegen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StoregenResult;

/// Port for persisting generated artifacts.
///
/// Implemented by:
/// - `storegen_adapters::filesystem::LocalFilesystem` (production)
/// - `storegen_adapters::filesystem::MemoryFilesystem` (testing)
/// - `storegen_adapters::filesystem::DryRunFilesystem` (`--dry-run`)
///
/// ## Emission guard
///
/// `create_new` is create-exclusive: if `path` is already occupied it must
/// fail with `ApplicationError::Collision` and leave the existing file as it
/// was. A failed write leaves either nothing or the complete content.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactWriter: Send + Sync {
    /// Create `path` (and any missing parent directories) holding `content`.
    fn create_new(&self, path: &Path, content: &str) -> StoregenResult<()>;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}
