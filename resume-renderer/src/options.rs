//! Render options — how field values are inserted and which date the footer shows.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// How field values are written into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Insert values exactly as given. Values may carry markup.
    #[default]
    Verbatim,
    /// Escape `& < > " ' /` in every inserted value. Changes output bytes for
    /// any value containing those characters.
    Html,
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeMode::Verbatim => write!(f, "verbatim"),
            EscapeMode::Html => write!(f, "html"),
        }
    }
}

impl FromStr for EscapeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbatim" | "none" => Ok(Self::Verbatim),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown escape mode '{other}'; expected: verbatim, html")),
        }
    }
}

/// Options for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape: EscapeMode,
    /// Footer date. `None` means the local date at render time.
    pub generated_on: Option<NaiveDate>,
}
