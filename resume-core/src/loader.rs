//! Reading resume documents from disk.
//!
//! # Conventions
//!
//! ```text
//! tailored_resume.json   (default input when no path is given)
//! tailored_resume.html   (default output: input with its extension replaced)
//! ```
//!
//! Loading never panics. Each failure maps to one [`LoadError`] variant so
//! callers can report "missing file", "not JSON" and "wrong shape" apart.

use std::path::{Path, PathBuf};

use serde_json::error::Category;

use crate::error::LoadError;
use crate::types::ResumeRecord;

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "tailored_resume.json";

/// `<input>` with its extension replaced by `.html` (appended if it has none).
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

// ---------------------------------------------------------------------------
// 2. Parse
// ---------------------------------------------------------------------------

/// Parse a resume document. `path` is only used to label errors.
///
/// Syntax errors and truncated input become [`LoadError::InvalidJson`];
/// well-formed JSON of the wrong shape becomes [`LoadError::Shape`].
pub fn parse_resume(contents: &str, path: &Path) -> Result<ResumeRecord, LoadError> {
    serde_json::from_str(contents).map_err(|source| match source.classify() {
        Category::Data => LoadError::Shape { path: path.to_path_buf(), source },
        Category::Syntax | Category::Eof | Category::Io => {
            LoadError::InvalidJson { path: path.to_path_buf(), source }
        }
    })
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Read and parse the resume document at `path`.
///
/// Returns [`LoadError::NotFound`] if the file is absent and
/// [`LoadError::Io`] for any other read failure.
pub fn load_resume(path: &Path) -> Result<ResumeRecord, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound { path: path.to_path_buf() }
        } else {
            LoadError::Io { path: path.to_path_buf(), source }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read resume document");
    parse_resume(&contents, path)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
