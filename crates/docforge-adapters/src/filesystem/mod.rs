//! Filesystem adapters: production (`std::fs`) and in-memory (tests).

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
