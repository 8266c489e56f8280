use notebook_core::{from_document, to_document, Cell, Notebook};
use pretty_assertions::assert_eq;
use serde_json::json;

fn hello_world_document() -> serde_json::Value {
    json!({
        "cells": [
            {
                "cell_type": "markdown",
                "id": "a9541506",
                "metadata": {},
                "source": ["Hello world!\n", "============\n", "Print `Hello world!`:"],
            },
            {
                "cell_type": "code",
                "execution_count": 1,
                "id": "b777420a",
                "metadata": {},
                "outputs": [
                    {"name": "stdout", "output_type": "stream", "text": ["Hello world!\n"]},
                ],
                "source": ["print(\"Hello world!\")"],
            },
            {
                "cell_type": "markdown",
                "id": "a23ab5ac",
                "metadata": {},
                "source": ["Goodbye! 👋"],
            },
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5,
    })
}

#[test]
fn load_reads_version_ids_and_sources() {
    let notebook = from_document(&hello_world_document()).unwrap();

    assert_eq!(notebook.version, "4.5");
    let ids: Vec<&str> = notebook.iter().map(Cell::id).collect();
    assert_eq!(ids, vec!["a9541506", "b777420a", "a23ab5ac"]);

    match &notebook.cells[1] {
        Cell::Code(code) => {
            assert_eq!(code.execution_count, Some(1));
            assert_eq!(code.outputs.len(), 1);
        }
        other => panic!("expected code cell, got {other:?}"),
    }
}

#[test]
fn round_trip_preserves_everything_but_outputs() {
    let notebook = from_document(&hello_world_document()).unwrap();
    let document = to_document(&notebook).unwrap();
    let reloaded = from_document(&document).unwrap();

    assert_eq!(reloaded.version, notebook.version);
    assert_eq!(reloaded.len(), notebook.len());
    for (reloaded_cell, original_cell) in reloaded.iter().zip(notebook.iter()) {
        assert_eq!(reloaded_cell.id(), original_cell.id());
        assert_eq!(reloaded_cell.source(), original_cell.source());
    }

    // outputs are intentionally cleared by serialization
    assert_eq!(document["cells"][1]["outputs"], json!([]));
    match &reloaded.cells[1] {
        Cell::Code(code) => {
            assert_eq!(code.execution_count, Some(1));
            assert!(code.outputs.is_empty());
        }
        other => panic!("expected code cell, got {other:?}"),
    }
}

#[test]
fn serialization_is_idempotent() {
    let notebook = from_document(&hello_world_document()).unwrap();
    let first = serde_json::to_string(&to_document(&notebook).unwrap()).unwrap();

    let reloaded = from_document(&serde_json::from_str(&first).unwrap()).unwrap();
    let second = serde_json::to_string(&to_document(&reloaded).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_notebook_is_valid_both_ways() {
    let document = json!({"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5});
    let notebook = from_document(&document).unwrap();
    assert!(notebook.is_empty());
    assert_eq!(to_document(&notebook).unwrap(), document);
}

#[test]
fn never_executed_cells_round_trip_a_null_count() {
    let document = json!({
        "cells": [{
            "cell_type": "code",
            "execution_count": null,
            "id": "c1",
            "metadata": {},
            "outputs": [],
            "source": ["pass"],
        }],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 0,
    });

    let notebook = from_document(&document).unwrap();
    assert_eq!(notebook.version, "4.0");
    assert_eq!(to_document(&notebook).unwrap(), document);
}

#[test]
fn version_string_must_parse_back_to_integers() {
    let notebook = Notebook::new("four.five", Vec::new());
    let err = to_document(&notebook).unwrap_err();
    assert!(matches!(
        err,
        notebook_core::NotebookError::VersionFormat(_)
    ));
}
