/// An inline style together with the delimiter that marks it.
///
/// All delimiter constants live here; the parser asks the style for its
/// delimiter and never hardcodes `**`, `_` or `` ` ``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    /// `**bold**`
    Strong,
    /// `_italic_`
    Emphasis,
    /// `` `monospace` ``
    Code,
}

impl InlineStyle {
    /// Styles in the order their passes run.
    pub const ORDER: [InlineStyle; 3] = [
        InlineStyle::Strong,
        InlineStyle::Emphasis,
        InlineStyle::Code,
    ];

    pub const fn delimiter(self) -> &'static str {
        match self {
            InlineStyle::Strong => "**",
            InlineStyle::Emphasis => "_",
            InlineStyle::Code => "`",
        }
    }
}
