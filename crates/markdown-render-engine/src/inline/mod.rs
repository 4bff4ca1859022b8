//! # Inline Transformation
//!
//! Cursor-based substitution of inline styles within a single line.
//!
//! ## Architecture
//!
//! Inline transformation runs only on ordinary lines handed out by the
//! scanner; fenced content never reaches it. Each style is one pass over the
//! line:
//!
//! 1. **Strong** (`**…**`)
//! 2. **Emphasis** (`_…_`)
//! 3. **Code** (`` `…` ``)
//!
//! The output of one pass is the input of the next, so markup produced by an
//! earlier pass is plain text to a later one.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `InlineNode` (Text, Delimited)
//! - **`kinds`**: `InlineStyle`, which owns each style's delimiter
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_delimited()` splits a line into nodes for one style
//! - **`transform`**: `transform_line()` applies all passes through a `Markup`
//!
//! ## Matching Rules
//!
//! Matching is shortest-first and non-overlapping: an opener pairs with the
//! next occurrence of the same delimiter on the line. An opener without a
//! closer stays literal. There is no escaping and no nesting.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod transform;
pub mod types;

pub use kinds::InlineStyle;
pub use parser::parse_delimited;
pub use transform::{substitute, transform_line};
pub use types::{InlineNode, Span};
