//! Prompting adapters.
//!
//! Only the scripted (test) prompter lives here; the real terminal
//! prompter is in the CLI crate, next to its dialoguer dependency.

mod scripted;

pub use scripted::{Reply, ScriptedPrompter};
