//! Conversion pipeline: load → render → write.
//!
//! ## `write_document` protocol
//!
//! 1. Create the parent directory if needed.
//! 2. Write to `<path>.tmp`.
//! 3. Rename to the final path (atomic on POSIX).
//!
//! A failed write never leaves a half-written document at the target path.

use std::path::{Path, PathBuf};

use resume_core::loader;

use crate::error::{write_err, ConvertError};
use crate::html::Renderer;
use crate::options::RenderOptions;

/// One conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// `None` derives the output from the input via
    /// [`loader::default_output_path`].
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
}

impl ConvertRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: None, options: RenderOptions::default() }
    }

    /// The path the document will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| loader::default_output_path(&self.input))
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Run a conversion. Never panics; every failure is a [`ConvertError`].
pub fn convert(request: &ConvertRequest) -> Result<ConvertOutcome, ConvertError> {
    let output = request.output_path();
    let resume = loader::load_resume(&request.input)?;
    let html = Renderer::new(request.options.clone()).render(&resume);
    write_document(&output, &html)?;

    tracing::info!(
        input = %request.input.display(),
        output = %output.display(),
        bytes = html.len(),
        "converted resume"
    );
    Ok(ConvertOutcome { input: request.input.clone(), output, bytes: html.len() })
}

pub(crate) fn write_document(path: &Path, content: &str) -> Result<(), ConvertError> {
    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    write_document_with_tmp(path, content, &tmp)
}

fn write_document_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
        }
    }

    std::fs::write(tmp, content).map_err(|e| write_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::debug!("wrote: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use resume_core::LoadError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn output_defaults_to_html_sibling() {
        let request = ConvertRequest::new("data/tailored_resume.json");
        assert_eq!(request.output_path(), PathBuf::from("data/tailored_resume.html"));
    }

    #[test]
    fn explicit_output_wins() {
        let request = ConvertRequest {
            output: Some(PathBuf::from("site/index.html")),
            ..ConvertRequest::new("resume.json")
        };
        assert_eq!(request.output_path(), PathBuf::from("site/index.html"));
    }

    #[test]
    fn write_creates_parent_and_cleans_tmp() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("out.html");
        write_document(&path, "<html></html>").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "<html></html>");
        assert!(!dir.path().join("nested").join("out.html.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_tmp() {
        let dir = TempDir::new().expect("tempdir");
        // A directory at the target path makes the rename fail.
        let target = dir.path().join("out.html");
        fs::create_dir_all(target.join("occupied")).expect("mkdir");
        let tmp = dir.path().join("out.html.tmp");

        let err = write_document_with_tmp(&target, "x", &tmp).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }), "got: {err}");
        assert!(!tmp.exists(), ".tmp must be removed after a failed rename");
    }

    #[test]
    fn missing_input_is_load_error_and_writes_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let request = ConvertRequest::new(dir.path().join("missing.json"));
        let err = convert(&request).unwrap_err();
        assert!(matches!(err, ConvertError::Load(LoadError::NotFound { .. })), "got: {err}");
        assert!(!dir.path().join("missing.html").exists());
    }
}
