//! The py-percent "light script" format.
//!
//! Each cell becomes a block opened by a marker line: `# %% [markdown]`
//! for markdown cells (source comment-quoted with `# `), bare `# %%` for
//! code cells (source verbatim). Blocks are separated by exactly one blank
//! line.

use std::sync::OnceLock;

use notebook_core::{Cell, CodeCell, MarkdownCell, Notebook};
use regex::Regex;

use crate::prefix::{decorate, BlockPrefixes};

const MARKDOWN_HEADER: &str = "# %% [markdown]";
const CODE_HEADER: &str = "# %%";
const MARKDOWN_QUOTE: BlockPrefixes = BlockPrefixes::uniform("# ");

/// Render a notebook as a py-percent script. Deterministic: repeated calls
/// yield byte-identical output.
pub fn to_percent(notebook: &Notebook) -> String {
    let blocks: Vec<String> = notebook.iter().map(render_block).collect();
    blocks.join("\n\n")
}

fn render_block(cell: &Cell) -> String {
    let (header, body) = match cell {
        Cell::Markdown(markdown) => (
            MARKDOWN_HEADER,
            decorate(&markdown.source, &MARKDOWN_QUOTE).concat(),
        ),
        Cell::Code(code) => (CODE_HEADER, code.source.concat()),
    };

    if body.is_empty() {
        header.to_string()
    } else {
        format!("{header}\n{body}")
    }
}

/// Parse a py-percent script back into a notebook.
///
/// Marker lines open cells; a `[python]` tag (Starboard text) is accepted
/// as a code marker, so Starboard plain text parses too. Cell ids are
/// generated sequentially (`cell-0`, `cell-1`, …) since the script format
/// carries none, and the caller supplies the format version. Text before
/// the first marker is ignored.
pub fn from_percent(text: &str, version: &str) -> Notebook {
    let mut cells: Vec<Cell> = Vec::new();
    let mut pending: Option<(PendingKind, Vec<String>)> = None;

    for line in text.lines() {
        if let Some(captures) = header_pattern().captures(line) {
            flush(&mut cells, pending.take());
            let kind = match captures.name("tag").map(|tag| tag.as_str()) {
                Some("markdown") => PendingKind::Markdown,
                _ => PendingKind::Code,
            };
            pending = Some((kind, Vec::new()));
            continue;
        }

        if let Some((kind, lines)) = &mut pending {
            let content = match kind {
                PendingKind::Markdown => strip_comment_quote(line),
                PendingKind::Code => line,
            };
            lines.push(content.to_string());
        }
    }

    flush(&mut cells, pending.take());
    Notebook::new(version, cells)
}

#[derive(Debug, Clone, Copy)]
enum PendingKind {
    Code,
    Markdown,
}

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#\s*%%(?:\s*\[(?P<tag>[a-z]+)\])?\s*$").expect("header pattern is valid")
    })
}

fn strip_comment_quote(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("# ") {
        rest
    } else if line == "#" {
        ""
    } else {
        line
    }
}

fn flush(cells: &mut Vec<Cell>, pending: Option<(PendingKind, Vec<String>)>) {
    let Some((kind, mut lines)) = pending else {
        return;
    };

    // the blank separator line before the next marker is not cell content
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let source = restore_newlines(lines);
    let id = format!("cell-{}", cells.len());
    let cell = match kind {
        PendingKind::Code => Cell::Code(CodeCell {
            id,
            source,
            execution_count: None,
            outputs: Vec::new(),
        }),
        PendingKind::Markdown => Cell::Markdown(MarkdownCell { id, source }),
    };
    cells.push(cell);
}

fn restore_newlines(lines: Vec<String>) -> Vec<String> {
    let last = lines.len().checked_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, mut line)| {
            if Some(idx) != last {
                line.push('\n');
            }
            line
        })
        .collect()
}
