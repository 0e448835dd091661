//! Output filtering for the JS-only delivery mode.

use crate::domain::file_set::FileSet;

/// Extensions that survive JS-only mode. Matching mirrors a bare
/// "everything after the last dot" split, so a dotfile like
/// `.gitignore` is its own extension here.
const ALLOWED_EXTENSIONS: &[&str] = &[".js", ".json", ".css", ".md", ".gitignore"];

/// Config filenames allowed by name, wherever they sit in the tree.
const SPECIAL_FILENAMES: &[&str] = &["tailwind.config.js", "postcss.config.js"];

/// Filter `files` according to the inclusion flag.
///
/// With `include_non_js` the set passes through untouched. Without it,
/// every disallowed entry is replaced, not dropped: the content moves
/// aside to a markdown note at `{path}.md` explaining the omission, so
/// each input key still maps to exactly one output key.
pub fn sanitize(files: FileSet, include_non_js: bool) -> FileSet {
    if include_non_js {
        return files;
    }

    let mut safe = FileSet::default();
    let mut replaced = 0usize;
    for (path, content) in &files {
        if is_allowed(path) {
            safe.insert(path.clone(), content.clone());
        } else {
            safe.insert(format!("{path}.md"), omission_note(path));
            replaced += 1;
        }
    }
    if replaced > 0 {
        tracing::debug!(replaced, "non-JS entries replaced with notes");
    }
    safe
}

fn is_allowed(path: &str) -> bool {
    SPECIAL_FILENAMES.iter().any(|name| path.ends_with(name))
        || ALLOWED_EXTENSIONS.contains(&extension(path))
}

/// Everything from the last `.` on, or empty when no dot exists.
fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(index) => &path[index..],
        None => "",
    }
}

fn omission_note(path: &str) -> String {
    format!(
        "> NOTE: the original file \"{path}\" was omitted because non-JS files are not included by default.\n\nIf you want to include sample non-JS files, enable the includeNonJS option when generating. See ARCHITECTURE.md for guidance."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{samples, scaffolder};

    #[test]
    fn inclusion_flag_passes_everything_through() {
        let mut files = scaffolder::scaffold("T", "s", true);
        files.merge(samples::sample_files());
        let before: Vec<_> = files.iter().map(|(p, c)| (p.to_owned(), c.to_owned())).collect();

        let after = sanitize(files, true);
        let kept: Vec<_> = after.iter().map(|(p, c)| (p.to_owned(), c.to_owned())).collect();
        assert_eq!(before, kept);
    }

    #[test]
    fn starter_scaffold_survives_js_only_mode_unchanged() {
        let files = scaffolder::scaffold("T", "s", true);
        let count = files.len();
        let safe = sanitize(files, false);
        assert_eq!(safe.len(), count);
        assert!(safe.contains("package.json"));
        assert!(safe.contains(".gitignore"));
        assert!(safe.contains("tailwind.config.js"));
    }

    #[test]
    fn disallowed_entries_become_markdown_notes() {
        let mut files = FileSet::default();
        files.insert("recommended/backend_python/app.py", "print()");

        let safe = sanitize(files, false);
        assert_eq!(safe.len(), 1);
        assert!(!safe.contains("recommended/backend_python/app.py"));

        let note = safe.get("recommended/backend_python/app.py.md").unwrap();
        assert!(note.contains(
            "the original file \"recommended/backend_python/app.py\" was omitted because"
        ));
        assert!(note.contains("enable the includeNonJS option"));
    }

    #[test]
    fn every_input_key_maps_to_one_output_key() {
        let mut files = scaffolder::scaffold("T", "s", true);
        files.merge(samples::sample_files());
        let count = files.len();
        assert_eq!(sanitize(files, false).len(), count);
    }

    #[test]
    fn output_paths_are_allowed_or_explanatory() {
        let mut files = scaffolder::scaffold("T", "s", true);
        files.merge(samples::sample_files());

        for (path, content) in &sanitize(files, false) {
            if !is_allowed(path) {
                panic!("{path} left unfiltered");
            }
            if path.ends_with(".md") && content.starts_with("> NOTE:") {
                assert!(content.contains("was omitted because"));
            }
        }
    }

    #[test]
    fn special_config_names_pass_anywhere_in_the_tree() {
        let mut files = FileSet::default();
        files.insert("nested/tailwind.config.js", "x");
        files.insert("nested/postcss.config.js", "y");

        let safe = sanitize(files, false);
        assert!(safe.contains("nested/tailwind.config.js"));
        assert!(safe.contains("nested/postcss.config.js"));
    }

    #[test]
    fn extension_splits_on_the_last_dot() {
        assert_eq!(extension("a/b/app.py"), ".py");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension(".gitignore"), ".gitignore");
        assert_eq!(extension("Dockerfile.sample"), ".sample");
        assert_eq!(extension("Makefile"), "");
    }
}
