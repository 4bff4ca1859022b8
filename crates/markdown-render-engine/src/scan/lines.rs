/// Returns an iterator over the lines of a document.
///
/// Splits on `\n` only. A trailing newline yields a final empty line and a
/// `\r` before the newline stays part of the line, so the scanner sees the
/// document exactly as written.
pub fn document_lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}
