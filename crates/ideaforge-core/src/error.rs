//! Unified error handling for the Ideaforge core.
//!
//! The generation pipeline itself is total; no stage of it can fail.
//! Errors only arise at the edges: validating file paths before export and
//! talking to the filesystem through the [`Filesystem`] port.
//!
//! [`Filesystem`]: crate::application::ports::Filesystem

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// A file path in a [`FileSet`](crate::domain::FileSet) is unsafe to
    /// write (absolute, empty, or escaping the export root).
    #[error("Unsafe file path '{path}': {reason}")]
    UnsafePath { path: String, reason: String },

    /// The export target directory already exists and overwrite was not
    /// requested.
    #[error("Export target already exists at {path}")]
    ExportTargetExists { path: PathBuf },

    /// A filesystem operation failed (reported by the adapter).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Export failed and the best-effort cleanup of the partially written
    /// directory also failed. Carries both failures.
    #[error("Rollback failed for {path}: {reason} (export error: {original})")]
    RollbackFailed {
        path: PathBuf,
        reason: String,
        original: String,
    },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsafePath { path, reason } => vec![
                format!("The path '{}' cannot be written: {}", path, reason),
                "File paths must be relative and stay inside the export directory".into(),
            ],
            Self::ExportTargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different output directory".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!(
                    "A partially written directory may remain at: {}",
                    path.display()
                ),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsafePath { .. } => ErrorCategory::Validation,
            Self::ExportTargetExists { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::RollbackFailed { .. } => ErrorCategory::Filesystem,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
