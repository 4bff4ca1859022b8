//! # Renderers
//!
//! Each renderer is a [`ScanHandler`](crate::scan::ScanHandler) that applies
//! one output format's wrapping policy on top of the shared scanner, plus a
//! [`Markup`] table that the inline transformer uses for that format.
//!
//! - **`html`**: `<b>`, `<i>`, `<tt>`, `<pre>` with paragraph wrapping
//! - **`ansi`**: SGR escape codes, one output line per input line

pub mod ansi;
pub mod html;

pub use ansi::{Ansi, render_ansi};
pub use html::{Html, render_html};

use crate::inline::InlineStyle;

/// Opening and closing markup around a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub open: &'static str,
    pub close: &'static str,
}

impl Wrap {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    /// Appends `content` surrounded by this markup to `out`.
    pub fn wrap_into(self, content: &str, out: &mut String) {
        out.push_str(self.open);
        out.push_str(content);
        out.push_str(self.close);
    }
}

/// The markup vocabulary of an output format.
pub trait Markup {
    fn inline(&self, style: InlineStyle) -> Wrap;

    /// Markup around the trimmed body of a fenced block.
    fn preformatted(&self) -> Wrap;
}
