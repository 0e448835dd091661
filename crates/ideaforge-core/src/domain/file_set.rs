//! Generated file collections.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A set of generated files, keyed by relative path.
///
/// Backed by a `BTreeMap` so iteration and serialization are deterministic
/// (sorted by path). The blueprint contract guarantees no file ordering, so
/// sorted order is as good as any, and it keeps diffs stable.
///
/// `insert` replaces an existing entry; `merge` folds another set in with
/// the other set winning on collisions. That pair of behaviours is what
/// gives sample files precedence over starter files in the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSet {
    files: BTreeMap<String, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any existing entry at the same path.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Merge `other` into `self`; entries from `other` win on collision.
    pub fn merge(&mut self, other: FileSet) {
        self.files.extend(other.files);
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    /// Check every path is safe to write under an export root.
    ///
    /// Rejects empty paths, absolute paths, and any `..` component. The
    /// generator only ever produces plain relative paths; this guard exists
    /// for the export service, which also accepts caller-built sets.
    pub fn validate(&self) -> CoreResult<()> {
        for path in self.files.keys() {
            if path.is_empty() {
                return Err(CoreError::UnsafePath {
                    path: path.clone(),
                    reason: "path is empty".into(),
                });
            }
            if path.starts_with('/') || path.starts_with('\\') {
                return Err(CoreError::UnsafePath {
                    path: path.clone(),
                    reason: "path is absolute".into(),
                });
            }
            if path.split(['/', '\\']).any(|component| component == "..") {
                return Err(CoreError::UnsafePath {
                    path: path.clone(),
                    reason: "path escapes the export root".into(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (path, content) in iter {
            set.insert(path, content);
        }
        set
    }
}
