//! Utility helpers shared across integration tests.

/// Build a `Vec<String>` from a list of string slices.
///
/// This macro is primarily used in tests to reduce boilerplate when
/// constructing blocks of lines.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// A document with a selection, written inline with `[` and `]` markers.
pub struct Marked {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Parse a document containing `[` and `]` selection markers.
///
/// The markers are removed; the returned offsets refer to the bare text.
pub fn marked(source: &str) -> Marked {
    let start = source.find('[').expect("missing '[' marker");
    let close = source.find(']').expect("missing ']' marker");
    assert!(start < close, "'[' must come before ']'");
    let text = format!(
        "{}{}{}",
        &source[..start],
        &source[start + 1..close],
        &source[close + 1..]
    );
    Marked {
        text,
        start,
        end: close - 1,
    }
}

/// Reflow the lines touched by the marked selection at the default width and
/// splice the result back into the document.
pub fn reflow_marked(source: &str) -> String {
    let m = marked(source);
    let span = blockreflow::LineSpan::expand(&m.text, m.start, m.end).expect("valid selection");
    let replacement = blockreflow::reflow_default(span.lines()).expect("reflow should succeed");
    format!(
        "{}{}{}",
        &m.text[..span.first_line_start()],
        replacement,
        &m.text[span.last_line_end()..]
    )
}
