//! Domain-layer errors: validation failures in pure business logic.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping at higher layers)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-avs, price-oracle, task_mailbox".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute; generated paths must stay inside the project", path),
            ],
            Self::UnknownTemplate(name) => vec![
                format!("'{}' is not a known template", name),
                "Available templates: task-based, oracle".into(),
                "Try: avsforge list".into(),
            ],
        }
    }
}
