//! Error types for resume-renderer.

use std::path::PathBuf;

use thiserror::Error;

use resume_core::LoadError;

/// All errors that can arise from a conversion run.
///
/// Rendering itself cannot fail; every variant comes from the I/O on either
/// side of it.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The rendered document could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ConvertError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConvertError {
    ConvertError::Write { path: path.into(), source }
}
