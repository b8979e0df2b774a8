//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during project generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target project directory already exists.
    ///
    /// Raised by the precondition check, before any filesystem mutation.
    #[error("Project directory already exists at {path}")]
    DirectoryExists { path: PathBuf },

    /// The configuration collector was aborted by the user.
    #[error("Configuration prompt was cancelled")]
    PromptCancelled,

    /// A filesystem operation failed. Fatal: generation stops here and
    /// already-written artifacts are left in place.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::PromptCancelled => vec![
                "Configuration was cancelled".into(),
                "No files were written".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partially written files are not cleaned up; delete the project directory before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Validation,
            Self::PromptCancelled => ErrorCategory::Cancelled,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
