//! The blueprint aggregate and the request that produces one.

use serde::{Deserialize, Serialize};

use crate::domain::file_set::FileSet;

// ── GenerateRequest ──────────────────────────────────────────────────────────

/// Input to a generation run.
///
/// Deserializes from the JSON body shape callers already send:
/// `{"idea": "...", "includeNonJS": true}`. Both fields are optional on
/// the wire; a missing idea becomes the empty string and samples default
/// to off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateRequest {
    /// Free-text product idea. May be empty; the pipeline still produces
    /// a full blueprint from the fallback rules.
    #[serde(default)]
    pub idea: String,

    /// Include the non-JavaScript sample files (FastAPI, Dockerfile, Go).
    #[serde(default, rename = "includeNonJS")]
    pub include_non_js: bool,
}

impl GenerateRequest {
    /// Request for `idea` without the non-JS samples.
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            include_non_js: false,
        }
    }

    /// Toggle the non-JS samples.
    #[must_use]
    pub fn with_samples(mut self, include: bool) -> Self {
        self.include_non_js = include;
        self
    }

    /// True when the idea holds no usable text.
    pub fn is_blank(&self) -> bool {
        self.idea.trim().is_empty()
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::new("")
    }
}

// ── Blueprint ────────────────────────────────────────────────────────────────

/// Everything a generation run produces, in one value.
///
/// This is the wire shape consumers already parse, so field names and
/// types match it exactly: `logic` is one newline-joined string, not a
/// list, and `tech_stack` is the flattened category-ordered list rather
/// than the per-category record the pipeline works with internally.
/// Field order is serialization order; `title` leads and the bulky
/// `files` map closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    /// `"{domain} — {idea excerpt}"` headline.
    pub title: String,

    /// `Generated from: "{idea}"` restatement.
    pub summary: String,

    /// Numbered five-step processing narrative, newline-joined.
    pub logic: String,

    /// Recommended technologies, flattened in fixed category order with
    /// per-category duplicates already removed.
    pub tech_stack: Vec<String>,

    /// Ordered module names: core, then domain block, then feature hits,
    /// then trailing.
    pub modules: Vec<String>,

    /// ASCII folder tree of the scaffold, for display.
    pub folder_structure: String,

    /// Multi-line data-flow description.
    pub dfd: String,

    /// Multi-line architecture advice derived from the stack.
    pub architecture: String,

    /// Path to content map of every scaffold file.
    pub files: FileSet,
}

// ── tests ─────────────────────────────────────────────────────────────────────
