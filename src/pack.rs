//! Greedy word packing.
//!
//! Words are appended to the current line until the next one would overflow
//! the requested width. There is no look-ahead and words are never split, so a
//! word wider than the limit ends up alone on an over-long line. Widths are
//! display columns as measured by `UnicodeWidthStr::width`: wide characters
//! count twice and combining marks not at all, so only ASCII text has one
//! column per character.

use unicode_width::UnicodeWidthStr;

use crate::error::{ReflowError, Result};

#[inline]
fn flush_current(lines: &mut Vec<String>, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let cap = current.capacity();
    lines.push(std::mem::take(current));
    *current = String::with_capacity(cap);
}

/// Pack the whitespace-separated words of `text` into lines of at most
/// `max_width` columns.
///
/// # Errors
/// Returns [`ReflowError::ZeroWidth`] when `max_width` is zero.
///
/// # Examples
///
/// ```
/// use blockreflow::pack;
///
/// let lines = pack("The quick brown fox jumped over the lazy dogs", 30).unwrap();
/// assert_eq!(lines, vec!["The quick brown fox jumped", "over the lazy dogs"]);
/// ```
pub fn pack(text: &str, max_width: usize) -> Result<Vec<String>> {
    if max_width < 1 {
        return Err(ReflowError::ZeroWidth);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let spacer = usize::from(!current.is_empty());
        if current_width + spacer + word_width > max_width {
            flush_current(&mut lines, &mut current);
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    flush_current(&mut lines, &mut current);

    Ok(lines)
}
