//! Standalone HTML synthesis
//!
//! The document loads React, ReactDOM and Babel from fixed CDN URLs (in that
//! order), applies a baseline dark stylesheet followed by the extracted
//! styles, and runs the component through Babel before mounting it on
//! `#root`.

/// Runtime scripts, in load order
pub const RUNTIME_SCRIPTS: [&str; 3] = [
    "https://unpkg.com/react@18/umd/react.production.min.js",
    "https://unpkg.com/react-dom@18/umd/react-dom.production.min.js",
    "https://unpkg.com/@babel/standalone/babel.min.js",
];

/// Element id the component is mounted on
pub const ROOT_ELEMENT_ID: &str = "root";

/// Baseline stylesheet; extracted styles are appended after it
pub const BASE_STYLESHEET: &str = "\
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen', 'Ubuntu', sans-serif;
            background: #0f172a;
            color: #e2e8f0;
            min-height: 100vh;
        }
        .app {
            display: flex;
            min-height: 100vh;
        }
        .sidebar {
            width: 280px;
            background: #1e293b;
            border-right: 1px solid #334155;
            padding: 24px;
        }
        .sidebar-header h2 {
            color: #fff;
            margin-bottom: 8px;
        }
        .main-content {
            flex: 1;
            padding: 32px;
            max-width: 1200px;
        }
        button {
            padding: 12px 24px;
            background: #3b82f6;
            color: white;
            border: none;
            border-radius: 8px;
            cursor: pointer;
            font-size: 14px;
            font-weight: 500;
            transition: all 0.2s;
        }
        button:hover {
            background: #2563eb;
        }
        input[type=\"text\"] {
            padding: 12px 16px;
            background: #1e293b;
            border: 1px solid #334155;
            border-radius: 8px;
            color: #e2e8f0;
            font-size: 14px;
            width: 100%;
        }
        input[type=\"text\"]:focus {
            outline: none;
            border-color: #3b82f6;
        }
";

const HOOKS_PRELUDE: &str = "const { useState, useEffect } = React;";

/// Render the complete document
///
/// Closing-tag sequences inside the embedded sources are escaped so the
/// surrounding markup always stays complete.
#[must_use]
pub fn render_document(app_name: &str, component: &str, style: &str) -> String {
    let scripts: String = RUNTIME_SCRIPTS
        .iter()
        .enumerate()
        .map(|(i, src)| {
            // babel standalone is not served with CORS headers we rely on
            let crossorigin = if i < 2 { "crossorigin " } else { "" };
            format!("    <script {crossorigin}src=\"{src}\"></script>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{scripts}    <style>
{BASE_STYLESHEET}
{style}
    </style>
</head>
<body>
    <div id="{ROOT_ELEMENT_ID}"></div>
    <script type="text/babel">
        {HOOKS_PRELUDE}

{component}

        const root = ReactDOM.createRoot(document.getElementById('{ROOT_ELEMENT_ID}'));
        root.render(<App />);
    </script>
</body>
</html>
"#,
        title = escape_text(app_name),
        style = escape_closing_tag(style, "style"),
        component = escape_closing_tag(component, "script"),
    )
}

/// Escape `&`, `<` and `>` for element text
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Turn `</tag` into `<\/tag` (case-insensitive) inside raw-text elements
fn escape_closing_tag(text: &str, tag: &str) -> String {
    let needle = format!("</{tag}");
    let lower = text.to_ascii_lowercase();
    if !lower.contains(&needle) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for (pos, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..pos]);
        out.push_str("<\\/");
        last = pos + 2;
    }
    out.push_str(&text[last..]);
    out
}
