//! File-level access to notebook documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;
use crate::model::Notebook;
use crate::raw::{from_document, to_document};

/// Read an `.ipynb` file into its raw document form.
pub fn read_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load a [`Notebook`] straight from an `.ipynb` file.
pub fn load_notebook(path: &Path) -> Result<Notebook> {
    from_document(&read_document(path)?)
}

/// Serialize a [`Notebook`] and write it as pretty-printed JSON.
pub fn save_notebook(notebook: &Notebook, path: &Path) -> Result<()> {
    let document = to_document(notebook)?;
    let mut rendered = serde_json::to_string_pretty(&document)?;
    rendered.push('\n');
    write_atomic(path, &rendered)
}

/// Write `content` to `path` via a temporary file plus rename, so readers
/// never observe partial content.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_path = unique_tmp_path(path);
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(())
}

fn unique_tmp_path(path: &Path) -> PathBuf {
    let mut counter = 0u32;
    loop {
        let candidate = if counter == 0 {
            path.with_extension("tmp")
        } else {
            path.with_extension(format!("tmp{counter}"))
        };

        if !candidate.exists() {
            return candidate;
        }

        counter += 1;
    }
}
