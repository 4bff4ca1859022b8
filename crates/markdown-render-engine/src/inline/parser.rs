use super::{
    cursor::Cursor,
    kinds::InlineStyle,
    types::{InlineNode, Span},
};

/// Parses one line into [`InlineNode`]s for a single style.
///
/// # Matching
/// An opener pairs with the next occurrence of the same delimiter, so the
/// shortest span wins and matches never overlap. Scanning resumes after the
/// closer.
///
/// # Returns
/// A vector of nodes covering the entire input. Text between delimiter pairs
/// is emitted as `InlineNode::Text`.
pub fn parse_delimited(s: &str, style: InlineStyle) -> Vec<InlineNode> {
    let delim = style.delimiter().as_bytes();
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.starts_with(delim) {
            match try_parse_pair(&mut cur, delim) {
                Some(node) => {
                    let span = node.span();
                    flush_text(&mut out, text_start, span.start);
                    text_start = span.end;
                    out.push(node);
                    continue;
                }
                // No closer after this opener means none after any later one.
                None => break,
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, s.len());
    out
}

/// Attempts to parse a delimiter pair starting at the current position.
///
/// Returns `None` if the opener isn't closed on this line. On failure,
/// cursor position is restored.
fn try_parse_pair(cur: &mut Cursor<'_>, delim: &[u8]) -> Option<InlineNode> {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(delim) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    cur.bump_n(delim.len());
    let end = cur.pos();

    Some(InlineNode::Delimited {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
