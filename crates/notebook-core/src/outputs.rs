//! Text extraction from the opaque output records of code cells.

use serde_json::Value;

use crate::model::{Cell, Notebook};

/// Which output streams to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSelection {
    pub stdout: bool,
    pub stderr: bool,
}

impl Default for StreamSelection {
    fn default() -> Self {
        Self {
            stdout: true,
            stderr: false,
        }
    }
}

/// Concatenate the text of every `stream` output record whose `name`
/// matches the selection, in document order.
pub fn stream_text(notebook: &Notebook, selection: StreamSelection) -> String {
    let mut text = String::new();

    for cell in notebook {
        let Cell::Code(code) = cell else { continue };
        for output in &code.outputs {
            if output.get("output_type").and_then(Value::as_str) != Some("stream") {
                continue;
            }
            let wanted = match output.get("name").and_then(Value::as_str) {
                Some("stdout") => selection.stdout,
                Some("stderr") => selection.stderr,
                _ => false,
            };
            if !wanted {
                continue;
            }
            if let Some(lines) = output.get("text").and_then(Value::as_array) {
                for line in lines {
                    if let Some(line) = line.as_str() {
                        text.push_str(line);
                    }
                }
            }
        }
    }

    text
}
