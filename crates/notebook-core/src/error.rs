use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("invalid format version '{0}': expected \"<major>.<minor>\"")]
    VersionFormat(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotebookError>;
