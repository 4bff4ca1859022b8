/// A byte range `[start, end)` into the line being transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

/// A piece of a line after parsing it for one inline style.
///
/// Variants store spans rather than text; slicing the line with the spans of
/// all nodes in order reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any delimiter pair.
    Text(Span),
    /// A matched delimiter pair.
    Delimited {
        /// Full span including both delimiters.
        full: Span,
        /// Content between the delimiters (may be empty).
        inner: Span,
    },
}

impl InlineNode {
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Delimited { full, .. } => *full,
        }
    }
}
