use crate::render::Markup;

use super::{kinds::InlineStyle, parser::parse_delimited, types::InlineNode};

/// Runs every inline pass over one ordinary line.
///
/// Passes run in [`InlineStyle::ORDER`]; each consumes the previous pass's
/// output, so content inside a strong span is still eligible for emphasis
/// and code.
pub fn transform_line<M: Markup + ?Sized>(markup: &M, line: &str) -> String {
    InlineStyle::ORDER
        .iter()
        .fold(line.to_owned(), |acc, &style| substitute(markup, style, &acc))
}

/// Replaces every matched pair of `style` in `line` with the format's markup.
pub fn substitute<M: Markup + ?Sized>(markup: &M, style: InlineStyle, line: &str) -> String {
    let wrap = markup.inline(style);
    let mut out = String::with_capacity(line.len());

    for node in parse_delimited(line, style) {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(line)),
            InlineNode::Delimited { inner, .. } => wrap.wrap_into(inner.slice(line), &mut out),
        }
    }

    out
}
