//! Error types for resume-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a resume document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("could not find file {path}")]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading (permission denied, not UTF-8, etc.).
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not syntactically valid JSON.
    #[error("{path} is not a valid JSON file: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON whose shape does not fit a resume record, e.g. `coursework`
    /// given as a string instead of an object.
    #[error("{path} does not match the resume format: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::InvalidJson { path, .. }
            | LoadError::Shape { path, .. } => path,
        }
    }
}
