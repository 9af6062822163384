//! Invocation-wide configuration shared by every generator.

use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, naming::validate_identifier};

/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "java";

/// Read-only configuration resolved once per invocation.
///
/// Generators borrow it; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    namespace: String,
    root_dir: PathBuf,
}

impl Context {
    /// Create a context for `namespace` (e.g. `com.example.app`) whose
    /// package root lives at `root_dir`.
    pub fn new(namespace: impl Into<String>, root_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;
        Ok(Self {
            namespace,
            root_dir: root_dir.into(),
        })
    }

    /// Directory of the root package: `project_dir/source_root/com/example/app`.
    pub fn resolve_root(project_dir: &Path, source_root: &Path, namespace: &str) -> PathBuf {
        namespace
            .split('.')
            .fold(project_dir.join(source_root), |dir, segment| dir.join(segment))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Fully-qualified package for `segments` below the root namespace.
    pub fn package(&self, segments: &[&str]) -> String {
        segments.iter().fold(self.namespace.clone(), |mut pkg, s| {
            pkg.push('.');
            pkg.push_str(s);
            pkg
        })
    }

    /// Fully-qualified name of `type_name` inside `segments`.
    pub fn qualified(&self, segments: &[&str], type_name: &str) -> String {
        format!("{}.{}", self.package(segments), type_name)
    }

    /// Source file path for `type_name` inside `segments`.
    pub fn source_file(&self, segments: &[&str], type_name: &str) -> PathBuf {
        segments
            .iter()
            .fold(self.root_dir.clone(), |dir, s| dir.join(s))
            .join(format!("{type_name}.{SOURCE_EXTENSION}"))
    }
}

fn validate_namespace(namespace: &str) -> Result<(), DomainError> {
    if namespace.is_empty() {
        return Err(DomainError::InvalidNamespace {
            namespace: namespace.into(),
            reason: "cannot be empty".into(),
        });
    }
    for segment in namespace.split('.') {
        validate_identifier("namespace segment", segment).map_err(|e| {
            DomainError::InvalidNamespace {
                namespace: namespace.into(),
                reason: e.to_string(),
            }
        })?;
    }
    Ok(())
}
