//! Application layer errors.
//!
//! These errors represent failures in routing, argument handling and
//! emission. Pure logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during command routing and artifact emission.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A token does not name a command or command group.
    #[error("Unknown command '{token}'")]
    UnknownCommand {
        token: String,
        available: Vec<String>,
    },

    /// Input ran out while still inside a command group.
    #[error("Incomplete command '{path}'")]
    IncompleteCommand {
        path: String,
        available: Vec<String>,
    },

    /// Two registrations claim overlapping token paths.
    #[error("Conflicting command registration: {path}")]
    RouteConflict { path: String },

    /// A command was given arguments that do not match its contract.
    #[error("Invalid arguments for '{command}': expected {expected}, got {received:?}")]
    InvalidArguments {
        command: String,
        expected: String,
        received: Vec<String>,
    },

    /// The emission guard found the target already occupied.
    #[error("Refusing to overwrite existing file {path}")]
    Collision { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Writer state could not be accessed (lock poisoned).
    #[error("Artifact writer state is unavailable")]
    WriterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand { token, available } | Self::IncompleteCommand { path: token, available } => {
                let mut suggestions = vec![
                    format!("'{}' does not resolve to a command", token),
                    "Available commands:".into(),
                ];
                suggestions.extend(available.iter().map(|c| format!("  • {}", c)));
                suggestions
            }
            Self::InvalidArguments { command, expected, .. } => vec![
                format!("'{}' expects {}", command, expected),
                format!("Example: storegen {} stations Station String", command),
            ],
            Self::Collision { path } => vec![
                format!("The file '{}' already exists and was left untouched", path.display()),
                "Files created earlier in this run were kept".into(),
                "Remove the existing artifacts or choose a different entity name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RouteConflict { .. } | Self::WriterLockError => {
                vec!["This is a bug in storegen, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCommand { .. } | Self::IncompleteCommand { .. } => ErrorCategory::NotFound,
            Self::InvalidArguments { .. } => ErrorCategory::Validation,
            Self::Collision { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::WriterLockError | Self::RouteConflict { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
