//! Selection-driven line actions.
//!
//! An action turns the lines touched by a selection into replacement text.
//! The resulting [`Replacement`] covers whole lines, so splicing it back into
//! the document leaves everything outside the selected lines untouched.

use crate::{
    error::Result,
    reflow::{ReflowOptions, reflow},
    selection::LineSpan,
};

/// What to do with the selected lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAction {
    /// Rewrap the lines inside their framing.
    #[default]
    Reflow,
    /// Sort the lines.
    Sort,
}

/// Text to splice over `start..end` of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// First byte replaced.
    pub start: usize,
    /// One past the last byte replaced.
    pub end: usize,
    /// The new text, ending with a line terminator.
    pub text: String,
}

impl Replacement {
    /// Splice the replacement into `document`.
    ///
    /// # Panics
    /// Panics if `start..end` is not a valid character range of `document`,
    /// which cannot happen for the document the replacement was computed on.
    #[must_use]
    pub fn apply_to(&self, document: &str) -> String {
        let mut out =
            String::with_capacity(document.len() - (self.end - self.start) + self.text.len());
        out.push_str(&document[..self.start]);
        out.push_str(&self.text);
        out.push_str(&document[self.end..]);
        out
    }
}

/// Sort `lines` by byte order and join them with a trailing terminator.
///
/// # Examples
///
/// ```
/// use blockreflow::sort_lines;
///
/// let lines = vec!["pear".to_string(), "apple".to_string()];
/// assert_eq!(sort_lines(&lines), "apple\npear\n");
/// ```
#[must_use]
pub fn sort_lines(lines: &[String]) -> String {
    let mut sorted = lines.to_vec();
    sorted.sort();
    let mut out = sorted.join("\n");
    out.push('\n');
    out
}

impl LineAction {
    /// Produce the replacement text for the lines of `span`.
    ///
    /// A span past the end of the document has nothing to transform and
    /// yields empty text, so splicing it changes nothing.
    ///
    /// # Errors
    /// Propagates any error from [`reflow`].
    pub fn transform(self, span: &LineSpan, options: &ReflowOptions) -> Result<String> {
        if span.is_past_end() {
            log::debug!("selection lies past the last line; nothing to do");
            return Ok(String::new());
        }
        match self {
            Self::Reflow => reflow(span.lines(), options.width),
            Self::Sort => Ok(sort_lines(span.lines())),
        }
    }

    /// Expand `start..end` of `text` to whole lines and transform them.
    ///
    /// # Errors
    /// Returns an error if the selection is invalid or the transform fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockreflow::{LineAction, ReflowOptions};
    ///
    /// let doc = "keep\n// one\n// two\nkeep\n";
    /// let edit = LineAction::Reflow
    ///     .replacement(doc, 7, 14, &ReflowOptions::default())
    ///     .unwrap();
    /// assert_eq!(edit.apply_to(doc), "keep\n// one two\nkeep\n");
    /// ```
    pub fn replacement(
        self,
        text: &str,
        start: usize,
        end: usize,
        options: &ReflowOptions,
    ) -> Result<Replacement> {
        let span = LineSpan::expand(text, start, end)?;
        let replaced = self.transform(&span, options)?;
        Ok(Replacement {
            start: span.first_line_start(),
            end: span.last_line_end(),
            text: replaced,
        })
    }
}
