//! # markdown-render-engine
//!
//! Converts a small Markdown dialect (bold, italic, monospace and fenced
//! blocks) to HTML or ANSI terminal text.
//!
//! ```text
//! text → document_lines → Scanner ─┬─ ordinary line → transform_line → renderer policy
//!                                  └─ fence closed  → preformatted wrap
//! ```
//!
//! Conversion is pure and total: every input string produces an output
//! string, and no state survives between calls.

pub mod format;
pub mod inline;
pub mod render;
pub mod scan;

pub use format::{Format, FormatError, render};
pub use render::{Markup, render_ansi, render_html};
