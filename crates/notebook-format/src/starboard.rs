//! The Starboard web-notebook format, plain and HTML-embedded.

use notebook_core::{Cell, Notebook};

/// Pinned Starboard runtime artifact version. The CDN URLs derived from it
/// are a compatibility boundary and must be reproduced exactly.
pub const STARBOARD_VERSION: &str = "0.15.2";

const MARKDOWN_HEADER: &str = "# %% [markdown]";
const PYTHON_HEADER: &str = "# %% [python]";

/// Render a notebook as Starboard plain text. Markdown source is emitted
/// raw (Starboard renders it natively), code blocks carry the `[python]`
/// tag, and blocks follow each other without a blank separator line.
pub fn to_starboard(notebook: &Notebook) -> String {
    let blocks: Vec<String> = notebook
        .iter()
        .map(|cell| {
            let (header, body) = match cell {
                Cell::Markdown(markdown) => (MARKDOWN_HEADER, markdown.source.concat()),
                Cell::Code(code) => (PYTHON_HEADER, code.source.concat()),
            };
            if body.is_empty() {
                header.to_string()
            } else {
                format!("{header}\n{body}")
            }
        })
        .collect();

    blocks.join("\n")
}

/// Wrap the plain-text rendering in the fixed Starboard HTML document,
/// embedding it as an escaped string literal assigned to
/// `window.initialNotebookContent`.
pub fn to_starboard_html(notebook: &Notebook) -> String {
    let payload = escape_js_string(&to_starboard(notebook));
    format!(
        r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Starboard Notebook</title>
        <meta name="viewport" content="width=device-width,initial-scale=1">
        <link rel="icon" href="https://cdn.jsdelivr.net/npm/starboard-notebook@{version}/dist/favicon.ico">
        <link href="https://cdn.jsdelivr.net/npm/starboard-notebook@{version}/dist/starboard-notebook.css" rel="stylesheet">
    </head>
    <body>
        <script>
            window.initialNotebookContent = "{payload}";
            window.starboardArtifactsUrl = "https://cdn.jsdelivr.net/npm/starboard-notebook@{version}/dist/";
        </script>
        <script src="https://cdn.jsdelivr.net/npm/starboard-notebook@{version}/dist/starboard-notebook.js"></script>
    </body>
</html>
"#,
        version = STARBOARD_VERSION,
        payload = payload,
    )
}

/// Escape arbitrary cell content for embedding in a double-quoted JS
/// string literal. `<` becomes `\u003c` so a literal `</script>` in cell
/// content cannot terminate the surrounding script element.
fn escape_js_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '<' => escaped.push_str("\\u003c"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
