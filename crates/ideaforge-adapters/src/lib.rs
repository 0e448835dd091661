//! Infrastructure adapters for IdeaForge.
//!
//! This crate implements the ports defined in
//! `ideaforge-core::application::ports`. It contains all external
//! dependencies and I/O operations; the core stays pure.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
