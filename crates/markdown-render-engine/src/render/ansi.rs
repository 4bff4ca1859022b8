use crate::{
    inline::{InlineStyle, transform_line},
    scan::{ScanHandler, scan},
};

use super::{Markup, Wrap};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

/// ANSI terminal markup table.
///
/// Emphasis, code and preformatted blocks all use italics; terminals without
/// a distinct monospace style get one consistent look.
pub struct Ansi;

impl Markup for Ansi {
    fn inline(&self, style: InlineStyle) -> Wrap {
        match style {
            InlineStyle::Strong => Wrap::new(BOLD, RESET),
            InlineStyle::Emphasis | InlineStyle::Code => Wrap::new(ITALIC, RESET),
        }
    }

    fn preformatted(&self) -> Wrap {
        Wrap::new(ITALIC, RESET)
    }
}

#[derive(Default)]
struct AnsiBody {
    out: String,
}

impl ScanHandler for AnsiBody {
    fn ordinary_line(&mut self, line: &str, _is_blank: bool) {
        self.out.push_str(&transform_line(&Ansi, line));
        self.out.push('\n');
    }

    fn fence_closed(&mut self, content: &str) {
        Ansi.preformatted().wrap_into(content.trim(), &mut self.out);
        self.out.push('\n');
    }
}

/// Renders a document as ANSI-escaped terminal text.
///
/// Every ordinary line, blank or not, becomes one output line. The result
/// has trailing whitespace removed and ends with exactly one newline.
pub fn render_ansi(text: &str) -> String {
    let mut body = AnsiBody::default();
    let summary = scan(text, &mut body);
    log::debug!(
        "rendered ansi: {} lines, {} fences, ended in fence: {}",
        summary.lines,
        summary.fences,
        summary.ended_in_fence
    );

    let mut out = body.out.trim_end().to_owned();
    out.push('\n');
    out
}
