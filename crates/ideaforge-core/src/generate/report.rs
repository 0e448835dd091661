//! Fixed-shape display texts: data-flow, architecture, narrative, tree.
//!
//! Consumers show these verbatim, so the strings are contract. The
//! folder tree and data-flow text are constants; the architecture text
//! and the step narrative interpolate the run's stack and domain.

use crate::domain::tech_stack::TechStack;
use crate::domain::value_objects::Domain;

const DATA_FLOW: &str = "\
DFD (high-level)
[User Browser] --> [Next.js Frontend (UI)]
  --> POST /api/generate --> [Generator API (this app)]
  --> returns files JSON
  --> Frontend (JSZip) -> downloads ZIP -> Developer runs locally

Generated Project runtime (example)
[User Browser] --> [Generated App (Next.js)]
  --> /api/* --> Backend or external services (DB, Auth, ML)
";

// Display text only; the scaffold itself is the FileSet. Keeps the
// leading blank line consumers render above the tree.
const FOLDER_TREE: &str = r"
/ (project root)
├─ package.json
├─ README.md
├─ pages/
│  ├─ _app.js
│  ├─ index.js
│  └─ api/
│     └─ project.js
├─ components/
│  └─ Header.js
├─ styles/
│  └─ globals.css
├─ WHY.md
├─ ARCHITECTURE.md
";

/// High-level data-flow description. Fixed text.
pub fn data_flow() -> &'static str {
    DATA_FLOW
}

/// Display tree of the scaffold layout. Fixed text.
pub fn folder_tree() -> &'static str {
    FOLDER_TREE
}

/// Architecture advice derived from the recommended stack.
///
/// Frontend and styling entries join with `" , "`, the advisory
/// categories with `" | "`.
pub fn architecture(stack: &TechStack) -> String {
    format!(
        "Architecture (advice)\n\
         Frontend: {}\n\
         Styling: {}\n\
         Backend (recommended): {}\n\
         Database (recommended): {}\n\
         Auth (recommended): {}\n\
         Hosting (recommended): {}\n",
        stack.frontend.join(" , "),
        stack.styling.join(" , "),
        stack.backend.join(" | "),
        stack.database.join(" | "),
        stack.auth.join(" | "),
        stack.hosting.join(" | "),
    )
}

/// The five-step processing narrative, newline-joined.
pub fn logic_narrative(domain: Domain) -> String {
    [
        format!("1) parse idea and determine domain ({domain})"),
        "2) recommend tech stack (advice): frontend, styling, backend, DB, auth, hosting"
            .to_string(),
        "3) create JS-only starter files (Next.js + Tailwind) as runnable ZIP".to_string(),
        "4) include WHY.md and ARCHITECTURE.md describing choices and how to extend".to_string(),
        "5) if includeNonJS=true, add sample non-JS files under /recommended (text-only)"
            .to_string(),
    ]
    .join("\n")
}
