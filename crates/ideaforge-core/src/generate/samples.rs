//! Illustrative non-JavaScript sample files.
//!
//! Three fixed text-only files under the reserved `recommended/` prefix:
//! a FastAPI server, a Dockerfile, and a Go server. They are teaching
//! material for the generated README audience, not runnable code, and
//! each says so in its first line.

use crate::domain::file_set::FileSet;

const SAMPLE_PYTHON_APP: &str = r#"# Example FastAPI app (sample - text only)
from fastapi import FastAPI
app = FastAPI()

@app.get("/")
def read_root():
    return {"msg": "Hello from sample FastAPI (not runnable from this ZIP)"}  # Add real code locally
"#;

const SAMPLE_DOCKERFILE: &str = r#"# Sample Dockerfile (text only)
FROM python:3.10-slim
WORKDIR /app
COPY . .
RUN pip install fastapi uvicorn
CMD ["uvicorn", "app:app", "--host", "0.0.0.0", "--port", "8000"]
"#;

const SAMPLE_GO_SERVER: &str = r#"// Sample Go server (text only)
package main
import ("fmt"; "net/http")
func handler(w http.ResponseWriter, r *http.Request) { fmt.Fprint(w, "Hello from sample Go") }
func main() { http.HandleFunc("/", handler); http.ListenAndServe(":8080", nil) }
"#;

/// The fixed three-entry sample set. Constant output, no inputs.
pub fn sample_files() -> FileSet {
    let mut files = FileSet::default();
    files.insert("recommended/backend_python/app.py", SAMPLE_PYTHON_APP);
    files.insert("recommended/Dockerfile.sample", SAMPLE_DOCKERFILE);
    files.insert("recommended/backend_go/main.go", SAMPLE_GO_SERVER);
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_live_under_the_reserved_prefix() {
        let files = sample_files();
        assert_eq!(files.len(), 3);
        for path in files.paths() {
            assert!(path.starts_with("recommended/"), "{path} escapes prefix");
        }
    }

    #[test]
    fn every_sample_declares_itself_non_runnable() {
        let files = sample_files();
        for (path, content) in &files {
            assert!(
                content.to_lowercase().contains("sample"),
                "{path} should read as sample material"
            );
        }
    }

    #[test]
    fn sample_set_is_disjoint_from_the_starter_scaffold() {
        let starter = crate::generate::scaffolder::scaffold("T", "s", true);
        for path in sample_files().paths() {
            assert!(!starter.contains(path));
        }
    }
}
