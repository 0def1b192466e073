//! Infrastructure adapters for Stackmate.
//!
//! This crate implements the ports defined in
//! `stackmate-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedRunner, SystemRunner};
