//! resume-html — render a JSON resume into a standalone HTML page.
//!
//! # Usage
//!
//! ```text
//! resume-html                                   # tailored_resume.json → tailored_resume.html
//! resume-html <input.json>                      # → <input>.html
//! resume-html <input.json> <output.html>
//! resume-html <input.json> --escape html --date 2024-01-05
//! ```
//!
//! Exit codes: `0` success, `1` other failure, `2` bad arguments,
//! `3` input not found, `4` input is not JSON, `5` input is not a resume.

mod commands;

use std::process::ExitCode;

use clap::Parser;

use commands::convert::ConvertArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "resume-html",
    version,
    about = "Render a JSON resume into a self-contained HTML document",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match cli.convert.run() {
        Ok(code) => code,
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the user-facing result line.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
