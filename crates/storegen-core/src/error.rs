//! Unified error handling for storegen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for storegen core operations.
///
/// Nothing in the core catches or retries these; every failure travels to
/// the top-level invocation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoregenError {
    /// Errors from the domain layer (assembly and validation failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (routing and emission failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StoregenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in storegen".into(),
                "Please report it together with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the emission guard refused to overwrite a file.
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Collision { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StoregenResult<T> = Result<T, StoregenError>;
