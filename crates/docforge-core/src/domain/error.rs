//! Domain-level errors: validation failures in the collected answers.
//!
//! These are the errors the collector resolves interactively (re-ask) when
//! the value came from a prompt, and surfaces directly when the value came
//! from a CLI flag override.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (answers may be re-collected)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Project name '{name}' contains no letters or digits")]
    UnusableProjectName { name: String },

    #[error("You must select at least one layer")]
    NoLayersSelected,

    #[error("Must have at least 1 backend service (got {count})")]
    InvalidServiceCount { count: i64 },

    #[error("Expected {expected} backend service names, got {actual}")]
    ServiceCountMismatch { expected: usize, actual: usize },

    #[error("Backend service name '{name}' contains no letters or digits")]
    UnusableServiceName { name: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName | Self::UnusableProjectName { .. } => vec![
                "Project names must contain at least one letter or digit".into(),
                "Examples: My Cool App, demo-2024, Payments".into(),
            ],
            Self::NoLayersSelected => vec![
                "Select at least one layer with space, then confirm with enter".into(),
                "Non-interactive runs: pass --layers, e.g. --layers planning,backend".into(),
            ],
            Self::InvalidServiceCount { .. } => {
                vec!["A backend layer needs at least one service".into()]
            }
            Self::ServiceCountMismatch { expected, .. } => vec![
                format!("Provide exactly {expected} comma-separated names"),
                "Example: core,auth,api".into(),
            ],
            Self::UnusableServiceName { .. } => vec![
                "Service names must contain at least one letter or digit".into(),
                "Examples: core, auth, billing-v2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}
