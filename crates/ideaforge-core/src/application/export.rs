//! Export service - writes a blueprint's file set to disk.
//!
//! This service coordinates the export workflow:
//! 1. Validate every path in the file set
//! 2. Refuse (or, with overwrite, clear) an existing target
//! 3. Write all files, creating parent directories as needed
//! 4. Roll the target directory back if any write fails

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::application::ports::Filesystem;
use crate::domain::file_set::FileSet;
use crate::error::{CoreError, CoreResult};

/// Knobs for a single export run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Remove an existing target directory before writing.
    pub overwrite: bool,
}

/// What an export actually did, for display surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub root: PathBuf,
    pub files_written: usize,
}

/// Writes generated file sets through the [`Filesystem`] port.
pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    /// Create a new export service with the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Export `files` under the `root` directory.
    ///
    /// The whole run is treated as one unit: on any write failure the
    /// partially written target is removed again, so `root` either ends
    /// up complete or absent. A failed cleanup surfaces as
    /// [`CoreError::RollbackFailed`] carrying both causes.
    #[instrument(
        skip_all,
        fields(root = %root.as_ref().display(), files = files.len())
    )]
    pub fn export(
        &self,
        files: &FileSet,
        root: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> CoreResult<ExportReport> {
        let root = root.as_ref();

        files.validate()?;

        if self.filesystem.exists(root) {
            if !options.overwrite {
                return Err(CoreError::ExportTargetExists {
                    path: root.to_path_buf(),
                });
            }
            warn!(path = %root.display(), "removing existing export target");
            self.filesystem.remove_dir_all(root)?;
        }

        match self.write_all(files, root) {
            Ok(files_written) => {
                info!(files = files_written, "export completed");
                Ok(ExportReport {
                    root: root.to_path_buf(),
                    files_written,
                })
            }
            Err(error) => {
                warn!("write failed, attempting rollback");
                Err(self.rollback(root, error))
            }
        }
    }

    fn write_all(&self, files: &FileSet, root: &Path) -> CoreResult<usize> {
        self.filesystem.create_dir_all(root)?;

        let mut written = 0;
        for (path, content) in files {
            let target = root.join(path);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, content)?;
            written += 1;
        }
        Ok(written)
    }

    /// Remove the partially written target, folding a cleanup failure
    /// into the error that gets reported.
    fn rollback(&self, root: &Path, original: CoreError) -> CoreError {
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => {
                info!("rollback successful");
                original
            }
            Err(cleanup) => {
                warn!(error = %cleanup, path = %root.display(), "rollback failed");
                CoreError::RollbackFailed {
                    path: root.to_path_buf(),
                    reason: cleanup.to_string(),
                    original: original.to_string(),
                }
            }
        }
    }
}

/// Default export directory name for a blueprint title: whitespace runs
/// become underscores and an `_mvp` suffix marks generated output. An
/// empty title falls back to `project`.
pub fn default_export_dir(title: &str) -> String {
    let base = if title.is_empty() { "project" } else { title };
    let mut collapsed = String::with_capacity(base.len() + 4);
    let mut in_run = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push('_');
                in_run = true;
            }
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed.push_str("_mvp");
    collapsed
}
