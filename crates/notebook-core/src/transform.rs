//! Structural transforms over notebooks.
//!
//! Every transform is a pure function returning a fully independent
//! notebook: fresh cell and source vectors are built at the boundary, so
//! producing a derived notebook can never mutate the input as a side
//! effect.

use crate::model::{Cell, CodeCell, MarkdownCell, Notebook};

const FENCE_OPEN: &str = "'''python";
const FENCE_CLOSE: &str = "'''";

/// Replace every code cell with a markdown cell quoting its source inside
/// a language-tagged fence. Markdown cells pass through unchanged; version
/// and cell order are preserved.
pub fn markdownize(notebook: &Notebook) -> Notebook {
    let cells = notebook
        .iter()
        .map(|cell| match cell {
            Cell::Code(code) => {
                let mut source = Vec::with_capacity(code.source.len() + 2);
                source.push(FENCE_OPEN.to_string());
                source.extend(code.source.iter().cloned());
                source.push(FENCE_CLOSE.to_string());
                Cell::Markdown(MarkdownCell {
                    id: code.id.clone(),
                    source,
                })
            }
            Cell::Markdown(markdown) => Cell::Markdown(markdown.clone()),
        })
        .collect();

    Notebook::new(notebook.version.clone(), cells)
}

/// Keep only the code cells, in their original relative order.
pub fn strip_markdown(notebook: &Notebook) -> Notebook {
    let cells = notebook
        .iter()
        .filter_map(|cell| match cell {
            Cell::Code(code) => Some(Cell::Code(code.clone())),
            Cell::Markdown(_) => None,
        })
        .collect();

    Notebook::new(notebook.version.clone(), cells)
}

/// Drop every code cell's outputs and reset its execution count.
pub fn clear_outputs(notebook: &Notebook) -> Notebook {
    let cells = notebook
        .iter()
        .map(|cell| match cell {
            Cell::Code(code) => Cell::Code(CodeCell {
                id: code.id.clone(),
                source: code.source.clone(),
                execution_count: None,
                outputs: Vec::new(),
            }),
            Cell::Markdown(markdown) => Cell::Markdown(markdown.clone()),
        })
        .collect();

    Notebook::new(notebook.version.clone(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Notebook {
        Notebook::new(
            "4.5",
            vec![
                Cell::Markdown(MarkdownCell {
                    id: "m1".into(),
                    source: vec!["Intro\n".into(), "text".into()],
                }),
                Cell::Code(CodeCell {
                    id: "c1".into(),
                    source: vec!["a=1".into()],
                    execution_count: Some(3),
                    outputs: vec![json!({"output_type": "stream", "name": "stdout", "text": ["1\n"]})],
                }),
                Cell::Markdown(MarkdownCell {
                    id: "m2".into(),
                    source: vec!["Outro".into()],
                }),
            ],
        )
    }

    #[test]
    fn markdownize_wraps_code_in_fences() {
        let notebook = sample();
        let derived = markdownize(&notebook);

        assert_eq!(derived.version, "4.5");
        assert_eq!(derived.len(), 3);
        match &derived.cells[1] {
            Cell::Markdown(cell) => {
                assert_eq!(cell.id, "c1");
                assert_eq!(cell.source, vec!["'''python", "a=1", "'''"]);
            }
            other => panic!("expected markdown cell, got {other:?}"),
        }
    }

    #[test]
    fn markdownize_leaves_the_input_untouched() {
        let notebook = sample();
        let before = notebook.clone();
        let _ = markdownize(&notebook);
        assert_eq!(notebook, before);
    }

    #[test]
    fn strip_markdown_keeps_only_code() {
        let derived = strip_markdown(&sample());
        assert_eq!(derived.version, "4.5");
        assert_eq!(derived.len(), 1);
        match &derived.cells[0] {
            Cell::Code(cell) => {
                assert_eq!(cell.id, "c1");
                assert_eq!(cell.source, vec!["a=1"]);
            }
            other => panic!("expected code cell, got {other:?}"),
        }
    }

    #[test]
    fn clear_outputs_resets_execution_state_only() {
        let notebook = sample();
        let derived = clear_outputs(&notebook);

        match &derived.cells[1] {
            Cell::Code(cell) => {
                assert_eq!(cell.id, "c1");
                assert_eq!(cell.source, vec!["a=1"]);
                assert_eq!(cell.execution_count, None);
                assert!(cell.outputs.is_empty());
            }
            other => panic!("expected code cell, got {other:?}"),
        }
        // input untouched
        match &notebook.cells[1] {
            Cell::Code(cell) => assert_eq!(cell.execution_count, Some(3)),
            other => panic!("expected code cell, got {other:?}"),
        }
    }
}
