//! Infrastructure adapters for docforge.
//!
//! This crate implements the ports defined in
//! `docforge_core::application::ports`. It contains all external
//! dependencies and I/O operations; the terminal prompter lives in the CLI
//! crate because it depends on dialoguer.

pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::ScriptedPrompter;
