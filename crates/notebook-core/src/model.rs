use serde_json::Value;

use crate::error::{NotebookError, Result};

/// A Jupyter notebook: a format version plus an ordered sequence of cells.
///
/// The notebook exclusively owns its cells. An empty cell sequence is
/// valid. Cell order is significant and preserved by every operation that
/// does not explicitly drop cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    /// Format version in `"<major>.<minor>"` form, e.g. `"4.5"`.
    pub version: String,
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(version: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            version: version.into(),
            cells,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A notebook cell. Every renderer and transform matches exhaustively on
/// this tag, so a new variant cannot be silently ignored anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Code(CodeCell),
    Markdown(MarkdownCell),
}

impl Cell {
    /// Opaque identifier taken from the source document. Uniqueness is
    /// assumed from the producer, not enforced here.
    pub fn id(&self) -> &str {
        match self {
            Cell::Code(cell) => &cell.id,
            Cell::Markdown(cell) => &cell.id,
        }
    }

    /// Source lines, carried verbatim. By convention every line but the
    /// last ends with `\n`; this is never normalized.
    pub fn source(&self) -> &[String] {
        match self {
            Cell::Code(cell) => &cell.source,
            Cell::Markdown(cell) => &cell.source,
        }
    }
}

/// A cell of executable source code.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeCell {
    pub id: String,
    pub source: Vec<String>,
    /// `None` means the cell was never executed.
    pub execution_count: Option<i64>,
    /// Output records, opaque to the serializer. Serialization always
    /// writes them back as an empty list.
    pub outputs: Vec<Value>,
}

/// A cell of narrative markdown text.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownCell {
    pub id: String,
    pub source: Vec<String>,
}

/// Format a version pair as `"{major}.{minor}"`.
///
/// Exact string formatting, not division: a minor version of 10 or more
/// must come out as `"4.10"`, which `major + minor / 10` would corrupt.
pub fn format_version(major: u64, minor: u64) -> String {
    format!("{major}.{minor}")
}

/// Split a `"<major>.<minor>"` version string back into its integer
/// components.
pub fn parse_version(version: &str) -> Result<(u64, u64)> {
    let (major, minor) = version
        .split_once('.')
        .ok_or_else(|| NotebookError::VersionFormat(version.to_string()))?;

    let major = major
        .parse()
        .map_err(|_| NotebookError::VersionFormat(version.to_string()))?;
    let minor = minor
        .parse()
        .map_err(|_| NotebookError::VersionFormat(version.to_string()))?;

    Ok((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_version_without_decimal_arithmetic() {
        assert_eq!(format_version(4, 5), "4.5");
        assert_eq!(format_version(4, 0), "4.0");
        assert_eq!(format_version(4, 10), "4.10");
    }

    #[test]
    fn parses_version_components() {
        assert_eq!(parse_version("4.5").unwrap(), (4, 5));
        assert_eq!(parse_version("4.10").unwrap(), (4, 10));
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in ["45", "4.", ".5", "4.5.6", "four.five", "-1.2", ""] {
            let err = parse_version(bad).unwrap_err();
            assert!(matches!(err, NotebookError::VersionFormat(_)), "{bad}");
        }
    }

    #[test]
    fn cell_accessors_cover_both_variants() {
        let code = Cell::Code(CodeCell {
            id: "b777420a".into(),
            source: vec!["print(\"Hello world!\")".into()],
            execution_count: Some(1),
            outputs: Vec::new(),
        });
        let markdown = Cell::Markdown(MarkdownCell {
            id: "a9541506".into(),
            source: vec!["Hello world!\n".into(), "============".into()],
        });

        assert_eq!(code.id(), "b777420a");
        assert_eq!(markdown.id(), "a9541506");
        assert_eq!(code.source().len(), 1);
        assert_eq!(markdown.source().len(), 2);
    }
}
