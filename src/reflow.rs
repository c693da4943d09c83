//! Reflow a framed block of lines.
//!
//! The block's framing is detected with the codecs in [`crate::codec`], the
//! words inside it are repacked greedily to fit the remaining columns, and
//! the framing is put back around the new lines.

use crate::{
    codec::{self, Codec},
    error::{ReflowError, Result},
    pack::pack,
};

/// Width lines are wrapped to unless told otherwise.
pub const DEFAULT_WIDTH: usize = 80;

/// Settings for a reflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowOptions {
    /// Target width of an output line, framing included.
    pub width: usize,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

/// Rewrap `lines` to `width` columns while keeping their framing.
///
/// `lines` must not carry line terminators. The result joins the new lines
/// with `\n` and always ends with a single `\n`.
///
/// # Errors
/// Returns [`ReflowError::EmptyBlock`] for an empty slice,
/// [`ReflowError::EmbeddedTerminator`] when a line contains `\n`, and
/// [`ReflowError::WidthTooNarrow`] when the framing leaves no room for text.
///
/// # Examples
///
/// ```
/// use blockreflow::reflow;
///
/// let lines = vec!["# one two".to_string(), "# three".to_string()];
/// assert_eq!(reflow(&lines, 12).unwrap(), "# one two\n# three\n");
/// ```
pub fn reflow(lines: &[String], width: usize) -> Result<String> {
    if lines.is_empty() {
        return Err(ReflowError::EmptyBlock);
    }
    if let Some(index) = lines.iter().position(|line| line.contains('\n')) {
        return Err(ReflowError::EmbeddedTerminator { index });
    }

    let framing = codec::select(lines)?;
    let framing_width = framing.wrap_width();
    let budget = width
        .checked_sub(framing_width)
        .filter(|budget| *budget >= 1)
        .ok_or(ReflowError::WidthTooNarrow {
            width,
            framing: framing_width,
        })?;

    let mut content = String::new();
    for inner in framing.inner_contents() {
        content.push(' ');
        content.push_str(&inner);
    }

    let mut packed = pack(&content, budget)?;
    log::debug!(
        "packed {} words into {} lines of at most {budget} columns",
        content.split_whitespace().count(),
        packed.len()
    );
    // A block without words still keeps its framing.
    if packed.is_empty() {
        packed.push(String::new());
    }

    let mut out = framing.apply(&packed).join("\n");
    out.push('\n');
    Ok(out)
}

/// [`reflow`] at [`DEFAULT_WIDTH`].
///
/// # Errors
/// See [`reflow`].
pub fn reflow_default(lines: &[String]) -> Result<String> { reflow(lines, DEFAULT_WIDTH) }

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn short_line_is_kept() {
        let lines = string_vec!["foo bar baz"];
        assert_eq!(reflow_default(&lines).unwrap(), "foo bar baz\n");
    }

    #[test]
    fn one_long_line_splits_at_eighty() {
        let lines = vec!["foo ".repeat(40)];
        let expected = format!("{}foo\n", "foo ".repeat(19)).repeat(2);
        assert_eq!(reflow_default(&lines).unwrap(), expected);
    }

    #[test]
    fn rewraps_block_comment() {
        let lines = string_vec![
            "    /* The quick brown fox",
            "     * jumped over the lazy dogs. */",
        ];
        assert_eq!(
            reflow(&lines, 30).unwrap(),
            "    /* The quick brown fox\n     * jumped over the lazy\n     * dogs. */\n"
        );
    }

    #[test]
    fn rewraps_line_comments() {
        let lines = string_vec!["// alpha beta", "// gamma delta epsilon"];
        assert_eq!(
            reflow(&lines, 20).unwrap(),
            "// alpha beta gamma\n// delta epsilon\n"
        );
    }

    #[test]
    fn rewraps_bullet_item() {
        let lines = string_vec!["  - one two three", "    four five six"];
        assert_eq!(
            reflow(&lines, 16).unwrap(),
            "  - one two\n    three four\n    five six\n"
        );
    }

    #[test]
    fn blank_block_collapses_to_one_line() {
        let lines = string_vec!["", ""];
        assert_eq!(reflow_default(&lines).unwrap(), "\n");
    }

    #[test]
    fn rejects_embedded_terminator() {
        let lines = string_vec!["foo", "bar\n"];
        assert_eq!(
            reflow_default(&lines),
            Err(ReflowError::EmbeddedTerminator { index: 1 })
        );
    }

    #[test]
    fn rejects_empty_block() {
        assert_eq!(reflow_default(&[]), Err(ReflowError::EmptyBlock));
    }

    #[rstest]
    #[case(5)]
    #[case(4)]
    #[case(0)]
    fn rejects_width_consumed_by_framing(#[case] width: usize) {
        let lines = string_vec!["    /* foo", "     * bar */"];
        assert_eq!(
            reflow(&lines, width),
            Err(ReflowError::WidthTooNarrow { width, framing: 5 })
        );
    }
}
