use super::{
    classify::{LineClass, MarkdownLineClassifier},
    lines::document_lines,
};

/// Receives the output of a scan.
///
/// Renderers implement this to apply their own wrapping policy; the scanner
/// owns fence tracking so no renderer re-implements it.
pub trait ScanHandler {
    /// Called for every line outside a fenced block, in document order.
    fn ordinary_line(&mut self, line: &str, is_blank: bool);

    /// Called when a fenced block closes, and once more at end of input if a
    /// fence was left open.
    ///
    /// `content` is the untrimmed body: every line between the delimiters,
    /// each followed by `\n`.
    fn fence_closed(&mut self, content: &str);
}

/// Facts about a finished scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Number of lines seen, fence delimiters included.
    pub lines: usize,
    /// Number of fenced blocks reported, including an unterminated one.
    pub fences: usize,
    /// Whether the document ended inside an unterminated fence.
    pub ended_in_fence: bool,
}

#[derive(Debug, Default)]
struct ScanState {
    in_fence: bool,
    fence_buffer: String,
}

/// Line-by-line fence tracker driving a [`ScanHandler`].
///
/// State lives only as long as the scanner, so each conversion starts from
/// "not in fence" with an empty buffer.
pub struct Scanner<'h, H: ScanHandler> {
    classifier: MarkdownLineClassifier,
    state: ScanState,
    handler: &'h mut H,
    summary: ScanSummary,
}

impl<'h, H: ScanHandler> Scanner<'h, H> {
    pub fn new(handler: &'h mut H) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            state: ScanState::default(),
            handler,
            summary: ScanSummary::default(),
        }
    }

    pub fn push(&mut self, line: &str) {
        self.summary.lines += 1;

        match self.classifier.classify(line) {
            LineClass::FenceToggle => self.toggle_fence(),
            LineClass::Text { .. } if self.state.in_fence => {
                self.state.fence_buffer.push_str(line);
                self.state.fence_buffer.push('\n');
            }
            LineClass::Text { is_blank } => self.handler.ordinary_line(line, is_blank),
        }
    }

    pub fn finish(mut self) -> ScanSummary {
        // EOF flush
        if self.state.in_fence {
            log::debug!(
                "unterminated fence at end of input, emitting {} buffered bytes",
                self.state.fence_buffer.len()
            );
            self.emit_fence();
            self.summary.ended_in_fence = true;
        }
        self.summary
    }

    fn toggle_fence(&mut self) {
        if self.state.in_fence {
            log::trace!("fence closed at line {}", self.summary.lines);
            self.emit_fence();
            self.state.in_fence = false;
        } else {
            log::trace!("fence opened at line {}", self.summary.lines);
            self.state.fence_buffer.clear();
            self.state.in_fence = true;
        }
    }

    fn emit_fence(&mut self) {
        self.summary.fences += 1;
        self.handler.fence_closed(&self.state.fence_buffer);
    }
}

/// Scans a whole document, reporting to `handler`.
pub fn scan<H: ScanHandler>(text: &str, handler: &mut H) -> ScanSummary {
    let mut scanner = Scanner::new(handler);
    for line in document_lines(text) {
        scanner.push(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Line(String, bool),
        Fence(String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl ScanHandler for Recorder {
        fn ordinary_line(&mut self, line: &str, is_blank: bool) {
            self.0.push(Event::Line(line.to_string(), is_blank));
        }

        fn fence_closed(&mut self, content: &str) {
            self.0.push(Event::Fence(content.to_string()));
        }
    }

    fn record(text: &str) -> (Vec<Event>, ScanSummary) {
        let mut rec = Recorder::default();
        let summary = scan(text, &mut rec);
        (rec.0, summary)
    }

    fn line(s: &str) -> Event {
        Event::Line(s.to_string(), s.trim().is_empty())
    }

    fn fence(s: &str) -> Event {
        Event::Fence(s.to_string())
    }

    #[test]
    fn ordinary_lines_pass_through() {
        let (events, summary) = record("one\n\ntwo");
        assert_eq!(events, vec![line("one"), line(""), line("two")]);
        assert_eq!(
            summary,
            ScanSummary {
                lines: 3,
                fences: 0,
                ended_in_fence: false
            }
        );
    }

    #[test]
    fn fence_body_is_buffered_with_newlines() {
        let (events, summary) = record("before\n```\n  a **b**\n\nc\n```\nafter");
        assert_eq!(
            events,
            vec![line("before"), fence("  a **b**\n\nc\n"), line("after")]
        );
        assert_eq!(summary.fences, 1);
        assert!(!summary.ended_in_fence);
    }

    #[test]
    fn toggle_lines_are_never_reported() {
        let (events, _) = record("```rust\nx\n```  trailing text");
        assert_eq!(events, vec![fence("x\n")]);
    }

    #[test]
    fn empty_fence_reports_empty_buffer() {
        let (events, _) = record("```\n```");
        assert_eq!(events, vec![fence("")]);
    }

    #[test]
    fn unterminated_fence_is_flushed_at_end() {
        let (events, summary) = record("text\n```\nline one\nline two");
        assert_eq!(events, vec![line("text"), fence("line one\nline two\n")]);
        assert_eq!(summary.fences, 1);
        assert!(summary.ended_in_fence);
    }

    #[test]
    fn single_line_fence_opens_and_never_closes() {
        let (events, summary) = record("```Preformatted text **He He**```");
        assert_eq!(events, vec![fence("")]);
        assert!(summary.ended_in_fence);
    }

    #[test]
    fn buffer_is_reset_between_fences() {
        let (events, _) = record("```\nfirst\n```\n```\nsecond\n```");
        assert_eq!(events, vec![fence("first\n"), fence("second\n")]);
    }

    #[test]
    fn trailing_newline_after_closed_fence_is_an_ordinary_blank_line() {
        let (events, summary) = record("```\nx\n```\n");
        assert_eq!(events, vec![fence("x\n"), line("")]);
        assert_eq!(summary.lines, 4);
    }

    #[test]
    fn incremental_push_matches_scan() {
        let mut rec = Recorder::default();
        let mut scanner = Scanner::new(&mut rec);
        scanner.push("a");
        scanner.push("```");
        scanner.push("b");
        let summary = scanner.finish();
        assert!(summary.ended_in_fence);
        assert_eq!(rec.0, vec![line("a"), fence("b\n")]);
    }
}
