//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `docforge-adapters` crate provides the production and test
//! implementations; the CLI crate provides the terminal prompter.

use std::path::Path;

use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docforge_adapters::filesystem::LocalFilesystem` (production)
/// - `docforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, overwriting if present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Copy a single file. Callers check `exists` first; copying is only
    /// attempted against a source known to be present.
    fn copy_file(&self, from: &Path, to: &Path) -> ForgeResult<()>;
}

/// One choice in a multi-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    pub label: String,
    pub checked: bool,
}

/// Port for interactive prompting.
///
/// The collector owns the ask → validate → re-ask loop; implementations
/// only render one prompt and return the raw answer. `reject` displays a
/// validation message before the collector asks again.
///
/// Implemented by:
/// - `docforge_cli::prompt::TermPrompter` (dialoguer, production)
/// - `docforge_adapters::prompt::ScriptedPrompter` (testing)
pub trait Prompter {
    /// Free-text prompt.
    fn input(&self, message: &str, default: Option<&str>) -> ForgeResult<String>;

    /// Numeric prompt.
    fn integer(&self, message: &str, default: i64) -> ForgeResult<i64>;

    /// Checkbox prompt; returns the indices of the selected choices.
    fn multi_select(&self, message: &str, choices: &[SelectChoice]) -> ForgeResult<Vec<usize>>;

    /// Yes/no confirmation.
    fn confirm(&self, message: &str, default: bool) -> ForgeResult<bool>;

    /// Show a validation rejection before the question is re-asked.
    fn reject(&self, message: &str) -> ForgeResult<()>;
}
