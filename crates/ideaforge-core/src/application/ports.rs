//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external
//! systems. The `ideaforge-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ideaforge_adapters::filesystem::LocalFilesystem` (production)
/// - `ideaforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The export service hands the port fully joined paths under its
/// export root; implementations write where told and never interpret
/// path semantics themselves.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CoreResult<()>;
}
