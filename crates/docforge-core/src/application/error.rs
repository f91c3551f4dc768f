//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target project directory already exists. Surfaced before any
    /// write happens, so a second run never silently overwrites the first.
    #[error("Project '{slug}' already exists at {}", path.display())]
    ProjectExists { slug: String, path: PathBuf },

    /// A filesystem operation failed (permissions, disk, ...).
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The prompting collaborator failed (closed stdin, no TTY, ...).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { slug, path } => vec![
                format!("The directory '{}' already exists", path.display()),
                format!("Pick a different project name (its slug must differ from '{slug}')"),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Non-interactive runs: pass NAME, --layers and --yes".into(),
            ],
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
