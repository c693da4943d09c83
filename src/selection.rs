//! Map a selection onto the whole lines it touches.
//!
//! Offsets are byte offsets into the document. A selection is widened to full
//! lines so the transformed text can be spliced over
//! `first_line_start..last_line_end` without disturbing anything outside it.

use crate::error::{ReflowError, Result};

/// A document together with a selected byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSelection<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> DocumentSelection<'a> {
    /// Validate and wrap a selection.
    ///
    /// # Errors
    /// Returns [`ReflowError::InvalidRange`] when `start > end`, when either
    /// offset lies past the end of `text`, or when either offset splits a
    /// character.
    pub fn new(text: &'a str, start: usize, end: usize) -> Result<Self> {
        if start > end || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(ReflowError::InvalidRange {
                start,
                end,
                len: text.len(),
            });
        }
        Ok(Self { text, start, end })
    }

    /// The whole document.
    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    /// Byte offset where the selection starts.
    #[must_use]
    pub fn start(&self) -> usize { self.start }

    /// Byte offset one past the end of the selection.
    #[must_use]
    pub fn end(&self) -> usize { self.end }

    /// The selected text itself.
    #[must_use]
    pub fn selected(&self) -> &'a str { &self.text[self.start..self.end] }

    /// Widen the selection to whole lines.
    #[must_use]
    pub fn line_span(&self) -> LineSpan {
        let bytes = self.text.as_bytes();
        // A selection that runs past a newline at its start begins on the next
        // line; one holding only that newline keeps the line it terminates.
        let starts_on_terminator = bytes.get(self.start) == Some(&b'\n');
        let first_line_start = if starts_on_terminator && self.start + 1 < self.end {
            self.start + 1
        } else {
            line_start_before(bytes, self.start)
        };
        let mut lines = Vec::new();
        let mut line_start = first_line_start;
        let last_line_end = loop {
            let line_end = line_end_from(bytes, line_start);
            lines.push(self.text[line_start..line_end].to_string());
            // A selection ending just past a terminator stops at that line.
            if line_end + 1 >= self.end {
                break (line_end + 1).min(self.text.len());
            }
            line_start = line_end + 1;
        };

        log::trace!(
            "selection {}..{} expanded to {} lines at {}..{}",
            self.start,
            self.end,
            lines.len(),
            first_line_start,
            last_line_end
        );
        LineSpan {
            lines,
            first_line_start,
            last_line_end,
            initial_remaining: self.start.saturating_sub(first_line_start),
        }
    }
}

fn line_start_before(bytes: &[u8], pos: usize) -> usize {
    bytes[..pos]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |idx| idx + 1)
}

fn line_end_from(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |idx| from + idx)
}

/// The whole lines covered by a selection, without their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    lines: Vec<String>,
    first_line_start: usize,
    last_line_end: usize,
    initial_remaining: usize,
}

impl LineSpan {
    /// Expand the selection `start..end` of `text` to the lines it touches.
    ///
    /// A selection ending exactly at the start of a line does not pull that
    /// line in. An empty selection yields the line holding the caret.
    ///
    /// # Errors
    /// Returns [`ReflowError::InvalidRange`] for an invalid selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockreflow::LineSpan;
    ///
    /// let span = LineSpan::expand("foo\nbar\nbaz\nqux\nxyz", 6, 14).unwrap();
    /// assert_eq!(span.lines(), ["bar", "baz", "qux"]);
    /// assert_eq!(span.first_line_start(), 4);
    /// assert_eq!(span.last_line_end(), 16);
    /// ```
    pub fn expand(text: &str, start: usize, end: usize) -> Result<Self> {
        Ok(DocumentSelection::new(text, start, end)?.line_span())
    }

    /// The selected lines, in document order.
    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    /// The line holding the start of the selection.
    #[must_use]
    pub fn first_line(&self) -> &str { self.lines.first().map_or("", String::as_str) }

    /// The line holding the end of the selection.
    #[must_use]
    pub fn last_line(&self) -> &str { self.lines.last().map_or("", String::as_str) }

    /// Offset at which the first selected line begins.
    #[must_use]
    pub fn first_line_start(&self) -> usize { self.first_line_start }

    /// Offset just past the terminator of the last selected line, or the
    /// document length when that line has none.
    #[must_use]
    pub fn last_line_end(&self) -> usize { self.last_line_end }

    /// How far into the first line the selection started.
    #[must_use]
    pub fn initial_remaining(&self) -> usize { self.initial_remaining }

    /// Whether the span covers no bytes at all.
    ///
    /// Only the empty line after a final terminator, or an empty document,
    /// produces such a span.
    #[must_use]
    pub fn is_past_end(&self) -> bool { self.first_line_start == self.last_line_end }
}
