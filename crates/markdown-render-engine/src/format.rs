use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::render::{render_ansi, render_html};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown output format '{0}' (expected 'html' or 'ansi')")]
    UnknownFormat(String),
}

/// An output format, for callers that choose a renderer at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Html,
    Ansi,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Html, Format::Ansi];

    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Ansi => "ansi",
        }
    }

    /// Converts `text` with this format's renderer.
    pub fn render(self, text: &str) -> String {
        match self {
            Format::Html => render_html(text),
            Format::Ansi => render_ansi(text),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Converts `text` to `format`.
pub fn render(format: Format, text: &str) -> String {
    format.render(text)
}
