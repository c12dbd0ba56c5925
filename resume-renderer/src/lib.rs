//! # resume-renderer
//!
//! Renders a [`ResumeRecord`](resume_core::ResumeRecord) into a single
//! self-contained HTML document, and runs the load → render → write pipeline.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use resume_renderer::{render, ConvertRequest};
//! use resume_core::loader;
//!
//! fn preview(path: &Path) {
//!     if let Ok(resume) = loader::load_resume(path) {
//!         println!("{}", render(&resume));
//!     }
//! }
//!
//! fn convert(path: &Path) {
//!     match resume_renderer::convert(&ConvertRequest::new(path)) {
//!         Ok(outcome) => println!("wrote {}", outcome.output.display()),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod error;
pub mod html;
pub mod options;
pub mod pipeline;

pub use error::ConvertError;
pub use html::{render, render_with, Renderer};
pub use options::{EscapeMode, RenderOptions};
pub use pipeline::{convert, ConvertOutcome, ConvertRequest};
