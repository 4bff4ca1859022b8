/// Fenced block delimiter (marker struct).
///
/// A line toggles fence state when its content, stripped of surrounding
/// whitespace, begins with three backticks. Whatever follows the backticks on
/// that line is discarded, so a fence cannot open and close on one line.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_toggle(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}
