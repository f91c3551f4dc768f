//! Command handlers. Each submodule owns one subcommand's `execute`.

pub mod completions;
pub mod init;
pub mod layers;
pub mod new;
