// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Template assembly (a generator bug, never user input)
    // ========================================================================
    #[error("Malformed template fragment at index {index}: {fragments:?}")]
    MalformedFragment {
        index: usize,
        fragments: Vec<String>,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {kind} '{value}': {reason}")]
    InvalidName {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedFragment { .. } => vec![
                "A generator produced a multi-line fragment where a single line was expected".into(),
                "This is a bug in storegen, please report it".into(),
            ],
            Self::InvalidName { kind, .. } => vec![
                format!("The {} must be a plain identifier", kind),
                "Start with a letter; use letters, digits and underscores".into(),
                "Example: storegen entity add stations Station String".into(),
            ],
            Self::InvalidNamespace { .. } => vec![
                "The namespace is a dotted package name, e.g. com.example.app".into(),
                "Set [project].namespace in .storegen.toml".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedFragment { .. } => ErrorCategory::Internal,
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::InvalidNamespace { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
