//! Starter file scaffolding.
//!
//! Produces the fixed-path file set of a minimal runnable Next.js
//! starter, parameterized by project title and summary. Templates are
//! compiled in and rendered by marker replacement.
//!
//! Escaping contract: values landing in a JSON context (the manifest
//! `name`, the API stub's `name` literal) pass through `serde_json`
//! string encoding; values landing in markdown or JSX text embed
//! verbatim. The scaffold is never executed here, so verbatim text
//! cannot reach an interpreter inside this process.

use serde::Serialize;

use crate::domain::file_set::FileSet;

// ── Package manifest ─────────────────────────────────────────────────────────

/// `package.json` shape. Field order is key order in the output.
#[derive(Debug, Serialize)]
struct PackageManifest {
    name: String,
    version: &'static str,
    private: bool,
    scripts: Scripts,
    dependencies: Dependencies,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    dev_dependencies: Option<DevDependencies>,
}

#[derive(Debug, Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    start: &'static str,
}

#[derive(Debug, Serialize)]
struct Dependencies {
    next: &'static str,
    react: &'static str,
    #[serde(rename = "react-dom")]
    react_dom: &'static str,
}

#[derive(Debug, Serialize)]
struct DevDependencies {
    tailwindcss: &'static str,
    postcss: &'static str,
    autoprefixer: &'static str,
}

fn manifest_json(title: &str, include_tailwind: bool) -> String {
    let manifest = PackageManifest {
        name: package_name(title),
        version: "1.0.0",
        private: true,
        scripts: Scripts {
            dev: "next dev -p 3000",
            build: "next build",
            start: "next start -p 3000",
        },
        dependencies: Dependencies {
            next: "13.5.6",
            react: "18.2.0",
            react_dom: "18.2.0",
        },
        dev_dependencies: include_tailwind.then_some(DevDependencies {
            tailwindcss: "^3.5.5",
            postcss: "^8.4.23",
            autoprefixer: "^10.4.14",
        }),
    };
    serde_json::to_string_pretty(&manifest).expect("manifest serializes")
}

/// Package name from the project title: every whitespace run becomes
/// one dash, then the whole name is lowercased. Leading and trailing
/// runs keep their dash; the name is display data, not a strict npm
/// identifier.
fn package_name(title: &str) -> String {
    let mut collapsed = String::with_capacity(title.len());
    let mut in_run = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push('-');
                in_run = true;
            }
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed.to_lowercase()
}

// ── Render context ───────────────────────────────────────────────────────────

const PROJECT_NAME_MARKER: &str = "{{PROJECT_NAME}}";
const SUMMARY_MARKER: &str = "{{SUMMARY}}";
const PROJECT_NAME_JSON_MARKER: &str = "{{PROJECT_NAME_JSON}}";

/// Marker replacement over the compiled-in templates.
///
/// Plain `str::replace`, no template language: the JSX templates are
/// full of literal braces, so markers use a shape (`{{NAME}}` in
/// ALL-CAPS) that never occurs in the template bodies themselves.
struct RenderContext<'a> {
    title: &'a str,
    summary: &'a str,
    title_json: String,
}

impl<'a> RenderContext<'a> {
    fn new(title: &'a str, summary: &'a str) -> Self {
        Self {
            title,
            summary,
            title_json: serde_json::to_string(title).expect("title serializes"),
        }
    }

    fn render(&self, template: &str) -> String {
        template
            .replace(PROJECT_NAME_MARKER, self.title)
            .replace(SUMMARY_MARKER, self.summary)
            .replace(PROJECT_NAME_JSON_MARKER, &self.title_json)
    }
}

// ── Templates ────────────────────────────────────────────────────────────────

const README_TEMPLATE: &str = r"# {{PROJECT_NAME}}

{{SUMMARY}}

This generated starter includes only JS/CSS/JSON/MD files to ensure it runs locally with Node.
Run:
1. npm install
2. npm run dev
Open http://localhost:3000
";

const GITIGNORE: &str = "node_modules\n.next\n.env.local\n";

// No trailing newline on the two config files or the bootstrap; the
// scaffold reproduces them byte for byte.
const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ["./pages/**/*.{js,jsx}","./components/**/*.{js,jsx}"],
  theme: { extend: {} },
  plugins: []
};"#;

const POSTCSS_CONFIG: &str =
    "module.exports = { plugins: { tailwindcss: {}, autoprefixer: {} } }";

const GLOBAL_STYLESHEET: &str = r"@tailwind base;
@tailwind components;
@tailwind utilities;

html,body{padding:0;margin:0;font-family:Inter,system-ui;background:#f8fafc;color:#0f172a}
main{max-width:980px;margin:24px auto;padding:16px}
";

const APP_BOOTSTRAP: &str = r"import '../styles/globals.css'
export default function App({ Component, pageProps }) { return <Component {...pageProps} /> }";

const HEADER_COMPONENT_TEMPLATE: &str = r#"export default function Header({ title = "{{PROJECT_NAME}}" }) {
  return (
    <header style={{padding:18, display:'flex', alignItems:'center', gap:12}}>
      <div style={{width:44,height:44,borderRadius:10,background:'linear-gradient(135deg,#2563eb,#7c3aed)',display:'flex',alignItems:'center',justifyContent:'center',color:'#fff',fontWeight:700}}>GP</div>
      <div>
        <div style={{fontSize:16,fontWeight:700}}>{title}</div>
        <div style={{fontSize:12,color:'#6b7280'}}>Generated Next.js Starter</div>
      </div>
    </header>
  );
}
"#;

const LANDING_PAGE_TEMPLATE: &str = r#"import Header from "../components/Header";
export default function Home(){
  return (
    <>
      <Header title="{{PROJECT_NAME}}" />
      <main>
        <section style={{background:'#fff',padding:20,borderRadius:12,boxShadow:'0 6px 18px rgba(15,23,42,0.06)'}}>
          <h1 style={{fontSize:22,fontWeight:700}}>{{PROJECT_NAME}}</h1>
          <p style={{color:'#475569',marginTop:8}}>{{SUMMARY}}</p>
          <p style={{marginTop:12}}>This is a generated JS-only starter. Edit pages/index.js to continue.</p>
        </section>
      </main>
    </>
  );
}
"#;

const API_STUB_TEMPLATE: &str = r#"export default function handler(req,res){
  res.status(200).json({ ok: true, message: "Demo generated project API", name: {{PROJECT_NAME_JSON}} });
}
"#;

const WHY_NOTES: &str = r"# Why these tools?

- Next.js — rapid React-based UI + built-in serverless API routes. Good for prototypes and production.
- Tailwind CSS — utility-first styling for consistent minimal design and rapid iteration.
- Node.js — runtime for the generated JS app.
- package.json scripts — standard for developer experience.

Each recommended non-JS tool (if present in tech_stack) is listed in ARCHITECTURE.md with reasons and how to add.
";

const ARCHITECTURE_NOTES: &str = r"# Architecture Notes

This generated starter is JS-only so it runs locally with Node.
If you want to add non-JS components (examples):
- Python FastAPI: place code in /recommended/backend_python and run in separate environment.
- Database: use Postgres in production; for quick local testing use SQLite or a hosted free tier.

See WHY.md for reasoning behind choices.
";

// ── Scaffold ─────────────────────────────────────────────────────────────────

/// Assemble the starter file set for a project.
///
/// `include_tailwind` gates only the manifest's dev-dependency block;
/// the styling config files ship either way so the scaffold layout
/// stays fixed.
pub fn scaffold(title: &str, summary: &str, include_tailwind: bool) -> FileSet {
    let context = RenderContext::new(title, summary);
    let mut files = FileSet::default();

    files.insert("package.json", manifest_json(title, include_tailwind));
    files.insert("README.md", context.render(README_TEMPLATE));
    files.insert(".gitignore", GITIGNORE);
    files.insert("tailwind.config.js", TAILWIND_CONFIG);
    files.insert("postcss.config.js", POSTCSS_CONFIG);
    files.insert("styles/globals.css", GLOBAL_STYLESHEET);
    files.insert("pages/_app.js", APP_BOOTSTRAP);
    files.insert(
        "components/Header.js",
        context.render(HEADER_COMPONENT_TEMPLATE),
    );
    files.insert("pages/index.js", context.render(LANDING_PAGE_TEMPLATE));
    files.insert("pages/api/project.js", context.render(API_STUB_TEMPLATE));
    files.insert("WHY.md", WHY_NOTES);
    files.insert("ARCHITECTURE.md", ARCHITECTURE_NOTES);

    tracing::debug!(files = files.len(), "starter scaffold assembled");
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_lays_out_the_fixed_paths() {
        let files = scaffold("Demo App", "Generated from: \"demo\"", true);
        let expected = [
            ".gitignore",
            "ARCHITECTURE.md",
            "README.md",
            "WHY.md",
            "components/Header.js",
            "package.json",
            "pages/_app.js",
            "pages/api/project.js",
            "pages/index.js",
            "postcss.config.js",
            "styles/globals.css",
            "tailwind.config.js",
        ];
        assert_eq!(files.paths().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn manifest_matches_the_published_shape() {
        let json = manifest_json("Demo App", true);
        assert_eq!(
            json,
            r#"{
  "name": "demo-app",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "dev": "next dev -p 3000",
    "build": "next build",
    "start": "next start -p 3000"
  },
  "dependencies": {
    "next": "13.5.6",
    "react": "18.2.0",
    "react-dom": "18.2.0"
  },
  "devDependencies": {
    "tailwindcss": "^3.5.5",
    "postcss": "^8.4.23",
    "autoprefixer": "^10.4.14"
  }
}"#
        );
    }

    #[test]
    fn tailwind_flag_gates_only_dev_dependencies() {
        let without = scaffold("X", "s", false);
        let manifest = without.get("package.json").unwrap();
        assert!(!manifest.contains("devDependencies"));
        // The config files ship regardless.
        assert!(without.contains("tailwind.config.js"));
        assert!(without.contains("postcss.config.js"));
    }

    #[test]
    fn package_name_collapses_whitespace_then_lowercases() {
        assert_eq!(package_name("Demo App"), "demo-app");
        assert_eq!(package_name("Education — Quiz Site"), "education-—-quiz-site");
        assert_eq!(package_name("  Padded\tTitle\n"), "-padded-title-");
        assert_eq!(package_name(""), "");
    }

    #[test]
    fn title_and_summary_interpolate_into_text_surfaces() {
        let files = scaffold("My Title", "Generated from: \"an idea\"", true);

        let readme = files.get("README.md").unwrap();
        assert!(readme.starts_with("# My Title\n\nGenerated from: \"an idea\"\n"));

        let header = files.get("components/Header.js").unwrap();
        assert!(header.contains(r#"Header({ title = "My Title" })"#));

        let landing = files.get("pages/index.js").unwrap();
        assert!(landing.contains("<h1 style={{fontSize:22,fontWeight:700}}>My Title</h1>"));
        assert!(landing.contains(">Generated from: \"an idea\"</p>"));
    }

    #[test]
    fn api_stub_embeds_the_title_json_escaped() {
        let files = scaffold("Say \"hi\"", "s", true);
        let stub = files.get("pages/api/project.js").unwrap();
        assert!(stub.contains(r#"name: "Say \"hi\"" }"#));
    }

    #[test]
    fn config_files_carry_no_trailing_newline() {
        let files = scaffold("X", "s", true);
        assert!(!files.get("tailwind.config.js").unwrap().ends_with('\n'));
        assert!(!files.get("postcss.config.js").unwrap().ends_with('\n'));
        assert!(!files.get("pages/_app.js").unwrap().ends_with('\n'));
        assert!(files.get("styles/globals.css").unwrap().ends_with('\n'));
    }

    #[test]
    fn no_marker_survives_rendering() {
        let files = scaffold("T", "s", true);
        for (path, content) in &files {
            for marker in [PROJECT_NAME_MARKER, SUMMARY_MARKER, PROJECT_NAME_JSON_MARKER] {
                assert!(!content.contains(marker), "unrendered {marker} in {path}");
            }
        }
    }
}
