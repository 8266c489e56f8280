//! Tree-style outline rendering of a notebook's structure.

use notebook_core::{Cell, Notebook};

use crate::prefix::{decorate, BlockPrefixes};

const SOURCE_PREFIXES: BlockPrefixes = BlockPrefixes {
    single: "    | ",
    first: "    ┌  ",
    interior: "    |  ",
    last: "    └  ",
};

/// Render a notebook as an indented outline: one header line, then a
/// branch per cell followed by its source. Source formatting is identical
/// for both cell variants; a never-executed code cell shows `(-)`.
pub fn outline(notebook: &Notebook) -> String {
    let mut rendered = format!("Jupyter Notebook v{}", notebook.version);

    for cell in notebook {
        match cell {
            Cell::Code(code) => {
                let count = code
                    .execution_count
                    .map_or_else(|| "-".to_string(), |count| count.to_string());
                rendered.push_str(&format!("\n└─▶ Code cell #{} ({count})", code.id));
            }
            Cell::Markdown(markdown) => {
                rendered.push_str(&format!("\n└─▶ Markdown cell #{}", markdown.id));
            }
        }

        let display: Vec<String> = cell.source().iter().map(|line| trim_newline(line)).collect();
        for line in decorate(&display, &SOURCE_PREFIXES) {
            rendered.push('\n');
            rendered.push_str(&line);
        }
    }

    rendered
}

// presentation only: the model keeps trailing newlines verbatim
fn trim_newline(line: &str) -> String {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_core::CodeCell;

    #[test]
    fn single_line_code_cell_renders_one_branch() {
        let notebook = Notebook::new(
            "4.5",
            vec![Cell::Code(CodeCell {
                id: "x1".into(),
                source: vec!["print(1)".into()],
                execution_count: Some(1),
                outputs: Vec::new(),
            })],
        );

        assert_eq!(
            outline(&notebook),
            "Jupyter Notebook v4.5\n└─▶ Code cell #x1 (1)\n    | print(1)"
        );
    }

    #[test]
    fn never_executed_count_renders_as_dash() {
        let notebook = Notebook::new(
            "4.5",
            vec![Cell::Code(CodeCell {
                id: "x1".into(),
                source: vec!["pass".into()],
                execution_count: None,
                outputs: Vec::new(),
            })],
        );

        assert!(outline(&notebook).contains("└─▶ Code cell #x1 (-)"));
    }
}
