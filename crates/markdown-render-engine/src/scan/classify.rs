use super::fence::CodeFence;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to the
/// surrounding context; whether a text line belongs to a fence body is the
/// scanner's decision, not the classifier's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The line opens or closes a fenced block.
    FenceToggle,
    /// Any other line.
    Text {
        /// Whether the line is whitespace only.
        is_blank: bool,
    },
}

/// Classifies individual lines for the scanner.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        if CodeFence::is_toggle(line) {
            LineClass::FenceToggle
        } else {
            LineClass::Text {
                is_blank: line.trim().is_empty(),
            }
        }
    }
}
