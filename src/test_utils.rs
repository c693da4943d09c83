//! Helper utilities for tests.

/// Collect a list of string literals (or anything that can become a `String`)
/// into a `Vec<String>`.
macro_rules! string_vec {
    ( $($elem:expr),* $(,)? ) => {
        vec![ $( ::std::string::ToString::to_string(&$elem) ),* ]
    };
}

/// Strip `[` and `]` selection markers from `marked`, returning the bare text
/// and the selection offsets they denoted.
pub(crate) fn unmark(marked: &str) -> (String, usize, usize) {
    let start = marked.find('[').expect("missing '[' marker");
    let close = marked.find(']').expect("missing ']' marker");
    let text = format!(
        "{}{}{}",
        &marked[..start],
        &marked[start + 1..close],
        &marked[close + 1..]
    );
    // Dropping '[' shifts the end offset left by one.
    (text, start, close - 1)
}
