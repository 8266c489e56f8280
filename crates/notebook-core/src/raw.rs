//! Loading a [`Notebook`] from a raw parsed `.ipynb` document and
//! serializing it back.
//!
//! The raw document is a `serde_json::Value` mapping with `cells`,
//! `metadata`, `nbformat` and `nbformat_minor` keys. Field access is done
//! key by key so that a missing or misshapen field can be reported with a
//! precise [`NotebookError::MalformedDocument`] message.

use serde_json::{json, Map, Value};

use crate::error::{NotebookError, Result};
use crate::model::{format_version, parse_version, Cell, CodeCell, MarkdownCell, Notebook};

/// Outcome of a load that also surfaces recoverable diagnostics.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub notebook: Notebook,
    /// Cells whose `cell_type` was neither `code` nor `markdown`, in
    /// document order.
    pub skipped: Vec<SkippedCell>,
}

/// A cell the loader dropped because its discriminator was unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCell {
    pub index: usize,
    pub cell_type: String,
}

/// Build a [`Notebook`] from a raw parsed document.
///
/// Cells with an unrecognized `cell_type` are silently skipped, matching
/// the behavior existing consumers rely on. Use
/// [`from_document_with_report`] to observe the skips.
pub fn from_document(document: &Value) -> Result<Notebook> {
    Ok(from_document_with_report(document)?.notebook)
}

/// Build a [`Notebook`] and report which cells were skipped.
pub fn from_document_with_report(document: &Value) -> Result<LoadReport> {
    let root = document
        .as_object()
        .ok_or_else(|| malformed("document root is not an object"))?;

    let nbformat = require_u64(root, "nbformat")?;
    let nbformat_minor = require_u64(root, "nbformat_minor")?;
    let raw_cells = root
        .get("cells")
        .ok_or_else(|| missing_key("cells"))?
        .as_array()
        .ok_or_else(|| malformed("'cells' is not an array"))?;

    let mut cells = Vec::with_capacity(raw_cells.len());
    let mut skipped = Vec::new();

    for (index, raw) in raw_cells.iter().enumerate() {
        let fields = raw
            .as_object()
            .ok_or_else(|| malformed(format!("cell {index} is not an object")))?;
        let cell_type = fields
            .get("cell_type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(format!("cell {index} lacks a 'cell_type' string")))?;

        match cell_type {
            "code" => cells.push(Cell::Code(load_code_cell(fields, index)?)),
            "markdown" => cells.push(Cell::Markdown(load_markdown_cell(fields, index)?)),
            other => skipped.push(SkippedCell {
                index,
                cell_type: other.to_string(),
            }),
        }
    }

    Ok(LoadReport {
        notebook: Notebook::new(format_version(nbformat, nbformat_minor), cells),
        skipped,
    })
}

/// Serialize a [`Notebook`] back into the raw document shape.
///
/// Outputs are always written back as an empty list and document metadata
/// is emitted empty; everything else round-trips exactly. With
/// `serde_json`'s sorted object keys the result is deterministic, so
/// re-serializing a loaded document is byte-identical.
pub fn to_document(notebook: &Notebook) -> Result<Value> {
    let (nbformat, nbformat_minor) = parse_version(&notebook.version)?;
    let cells: Vec<Value> = notebook.iter().map(cell_to_value).collect();

    Ok(json!({
        "cells": cells,
        "metadata": {},
        "nbformat": nbformat,
        "nbformat_minor": nbformat_minor,
    }))
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Code(code) => json!({
            "cell_type": "code",
            "execution_count": code.execution_count,
            "id": code.id,
            "metadata": {},
            "outputs": [],
            "source": code.source,
        }),
        Cell::Markdown(markdown) => json!({
            "cell_type": "markdown",
            "id": markdown.id,
            "metadata": {},
            "source": markdown.source,
        }),
    }
}

fn load_code_cell(fields: &Map<String, Value>, index: usize) -> Result<CodeCell> {
    Ok(CodeCell {
        id: require_id(fields, index)?,
        source: require_source(fields, index)?,
        // null and absent both mean "never executed"
        execution_count: fields.get("execution_count").and_then(Value::as_i64),
        outputs: fields
            .get("outputs")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    })
}

fn load_markdown_cell(fields: &Map<String, Value>, index: usize) -> Result<MarkdownCell> {
    Ok(MarkdownCell {
        id: require_id(fields, index)?,
        source: require_source(fields, index)?,
    })
}

fn require_id(fields: &Map<String, Value>, index: usize) -> Result<String> {
    fields
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(format!("cell {index} lacks an 'id' string")))
}

fn require_source(fields: &Map<String, Value>, index: usize) -> Result<Vec<String>> {
    let lines = fields
        .get("source")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("cell {index} lacks a 'source' array")))?;

    lines
        .iter()
        .map(|line| {
            line.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("cell {index} has a non-string source line")))
        })
        .collect()
}

fn require_u64(root: &Map<String, Value>, key: &str) -> Result<u64> {
    root.get(key)
        .ok_or_else(|| missing_key(key))?
        .as_u64()
        .ok_or_else(|| malformed(format!("'{key}' is not a non-negative integer")))
}

fn missing_key(key: &str) -> NotebookError {
    malformed(format!("missing required key '{key}'"))
}

fn malformed(reason: impl Into<String>) -> NotebookError {
    NotebookError::MalformedDocument(reason.into())
}
