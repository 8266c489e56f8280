//! Notebook object model and its raw-document pipeline.
//!
//! A [`Notebook`] is an ordered sequence of typed cells plus a format
//! version. It is built from a parsed `.ipynb` JSON document by
//! [`from_document`], written back by [`to_document`], and reshaped by the
//! pure transforms in [`transform`]. Renderers to textual formats live in
//! the `notebook-format` crate.

pub mod error;
pub mod fs;
pub mod model;
pub mod outputs;
pub mod raw;
pub mod transform;

pub use error::{NotebookError, Result};
pub use model::{format_version, parse_version, Cell, CodeCell, MarkdownCell, Notebook};
pub use outputs::{stream_text, StreamSelection};
pub use raw::{from_document, from_document_with_report, to_document, LoadReport, SkippedCell};
pub use transform::{clear_outputs, markdownize, strip_markdown};
