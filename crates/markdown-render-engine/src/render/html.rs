use crate::{
    inline::{InlineStyle, transform_line},
    scan::{ScanHandler, scan},
};

use super::{Markup, Wrap};

/// Emitted in place of a blank ordinary line.
const PARAGRAPH_BREAK: &str = "</p>\n<p>";
/// Removed after the outer wrap; left behind by consecutive breaks.
const EMPTY_PARAGRAPH: &str = "<p></p>";

/// HTML markup table.
pub struct Html;

impl Markup for Html {
    fn inline(&self, style: InlineStyle) -> Wrap {
        match style {
            InlineStyle::Strong => Wrap::new("<b>", "</b>"),
            InlineStyle::Emphasis => Wrap::new("<i>", "</i>"),
            InlineStyle::Code => Wrap::new("<tt>", "</tt>"),
        }
    }

    fn preformatted(&self) -> Wrap {
        Wrap::new("<pre>", "</pre>")
    }
}

/// Accumulates the HTML body before the outer paragraph wrap.
#[derive(Default)]
struct HtmlBody {
    out: String,
}

impl ScanHandler for HtmlBody {
    fn ordinary_line(&mut self, line: &str, is_blank: bool) {
        if is_blank {
            self.out.push_str(PARAGRAPH_BREAK);
            return;
        }
        self.out.push_str(&transform_line(&Html, line));
        self.out.push('\n');
    }

    fn fence_closed(&mut self, content: &str) {
        Html.preformatted().wrap_into(content.trim(), &mut self.out);
        self.out.push('\n');
    }
}

/// Renders a document as HTML.
///
/// Ordinary lines are kept one per output line and blank lines become
/// paragraph breaks. The body is then trimmed, wrapped in a single
/// `<p>`…`</p>` pair and stripped of empty paragraphs. A document that ends
/// inside an unterminated fence skips the wrap and is returned as built.
///
/// Content is not HTML-escaped.
pub fn render_html(text: &str) -> String {
    let mut body = HtmlBody::default();
    let summary = scan(text, &mut body);
    log::debug!(
        "rendered html: {} lines, {} fences, ended in fence: {}",
        summary.lines,
        summary.fences,
        summary.ended_in_fence
    );

    if summary.ended_in_fence {
        return body.out;
    }

    format!("<p>{}</p>", body.out.trim()).replace(EMPTY_PARAGRAPH, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_one_paragraph() {
        assert_eq!(
            render_html("This is **bold** text."),
            "<p>This is <b>bold</b> text.</p>"
        );
    }

    #[test]
    fn single_line_fence_is_an_empty_pre() {
        assert_eq!(
            render_html("```Preformatted text **He He**```"),
            "<pre></pre>\n"
        );
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        assert_eq!(
            render_html("First sentence.\n\nSecond sentence."),
            "<p>First sentence.\n</p>\n<p>Second sentence.</p>"
        );
    }

    #[test]
    fn consecutive_blank_lines_leave_no_empty_paragraphs() {
        let html = render_html("One.\n\n\n\nTwo.");
        assert!(!html.contains(EMPTY_PARAGRAPH));
        assert_eq!(html, "<p>One.\n</p>\n\n\n<p>Two.</p>");
    }

    #[test]
    fn whitespace_only_line_is_a_paragraph_break() {
        assert_eq!(render_html("a\n   \nb"), "<p>a\n</p>\n<p>b</p>");
    }

    #[test]
    fn fence_content_is_trimmed_and_not_transformed() {
        assert_eq!(
            render_html("```\n\n  **raw** _text_  \n\n```"),
            "<p><pre>**raw** _text_</pre></p>"
        );
    }

    #[test]
    fn unterminated_fence_skips_outer_wrap() {
        assert_eq!(
            render_html("Intro **text**\n```\ncode _here_"),
            "Intro <b>text</b>\n<pre>code _here_</pre>\n"
        );
    }

    #[test]
    fn empty_document_collapses_to_newline() {
        assert_eq!(render_html(""), "\n");
    }

    #[test]
    fn trailing_newline_leaves_a_dangling_paragraph_open() {
        assert_eq!(render_html("text\n"), "<p>text\n</p>\n");
    }
}
