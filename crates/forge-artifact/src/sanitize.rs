//! Component source clean-up
//!
//! The synthesized document loads the UI runtime from a CDN and runs the
//! component as a plain inline script, so module imports of the runtime or
//! of stylesheets, and the trailing `export default App`, must go.

use once_cell::sync::Lazy;
use regex::Regex;

static RUNTIME_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*import\s+(?:[\w$*{},\s]+\s+from\s+)?['"](?:react|react-dom|react-dom/client|[^'"]*\.css)['"]\s*;?\s*$"#,
    )
    .expect("valid import pattern")
});

static DEFAULT_EXPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*export\s+default\s+App\s*;?\s*$").expect("valid export pattern"));

static EXPORTED_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)export\s+default\s+(function|class)(\s+App\b)")
        .expect("valid declaration pattern")
});

/// Whether a line imports the UI runtime or a stylesheet
#[must_use]
pub fn is_runtime_import(line: &str) -> bool {
    RUNTIME_IMPORT.is_match(line)
}

/// Strip runtime/stylesheet imports and the trailing default export
///
/// `export default function App` keeps the declaration and drops the export.
#[must_use]
pub fn sanitize_component(source: &str) -> String {
    let mut lines: Vec<String> = source
        .lines()
        .filter(|line| !is_runtime_import(line))
        .map(|line| EXPORTED_DECLARATION.replace(line, "$1$2$3").into_owned())
        .collect();

    if let Some(last) = lines.iter().rposition(|l| !l.trim().is_empty()) {
        if DEFAULT_EXPORT.is_match(&lines[last]) {
            lines.remove(last);
        }
    }

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
