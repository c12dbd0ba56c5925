//! `resume-html [INPUT] [OUTPUT]` — load, render and write one resume.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use resume_core::{loader::DEFAULT_INPUT, LoadError};
use resume_renderer::{pipeline, ConvertError, ConvertRequest, EscapeMode, RenderOptions};

/// Arguments for a conversion run.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Resume JSON file to read.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// HTML file to write (default: INPUT with its extension replaced by .html).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// How field values are inserted: verbatim | html.
    #[arg(long, value_name = "MODE", default_value_t = EscapeMode::Verbatim)]
    pub escape: EscapeMode,

    /// Date shown in the footer, as YYYY-MM-DD (default: today).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Failures the user can act on, each with its own exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    NotFound = 3,
    InvalidJson = 4,
    Shape = 5,
}

impl ConvertArgs {
    /// Handled failures come back as `Ok` with their exit code; anything
    /// else is an `Err` that `main` reports with status 1.
    pub fn run(self) -> Result<ExitCode> {
        let input = self.input.unwrap_or_else(|| {
            println!("No arguments provided, using default file: {DEFAULT_INPUT}");
            PathBuf::from(DEFAULT_INPUT)
        });

        let request = ConvertRequest {
            input,
            output: self.output,
            options: RenderOptions { escape: self.escape, generated_on: self.date },
        };

        match pipeline::convert(&request) {
            Ok(outcome) => {
                println!(
                    "Successfully converted {} to {}",
                    outcome.input.display(),
                    outcome.output.display()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(ConvertError::Load(err)) => report_load_failure(err),
            Err(err) => Err(err.into()),
        }
    }
}

fn report_load_failure(err: LoadError) -> Result<ExitCode> {
    let failure = match &err {
        LoadError::NotFound { path } => {
            println!("Error: Could not find file {}", path.display());
            Failure::NotFound
        }
        LoadError::InvalidJson { path, source } => {
            tracing::debug!(%source, "JSON syntax error");
            println!("Error: {} is not a valid JSON file", path.display());
            Failure::InvalidJson
        }
        LoadError::Shape { path, source } => {
            println!("Error: {} does not match the resume format: {source}", path.display());
            Failure::Shape
        }
        LoadError::Io { .. } => return Err(err.into()),
    };
    Ok(ExitCode::from(failure as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_codes_are_distinct() {
        let codes = [Failure::NotFound as u8, Failure::InvalidJson as u8, Failure::Shape as u8];
        assert_eq!(codes, [3, 4, 5]);
    }

    #[test]
    fn io_failures_are_left_to_main() {
        let err = LoadError::Io {
            path: PathBuf::from("resume.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(report_load_failure(err).is_err());
    }
}
