//! Framing shared by every line of a block.
//!
//! This is the fallback codec: it accepts any block and treats whatever the
//! lines have in common as framing, which covers `//`, `#` and `>` style
//! comments as well as indented Markdown bullets. When nothing is shared the
//! prefix is simply empty.

use super::Codec;

const INDENTED_BULLET: &str = "  - ";
const BULLET_MARKER: &str = "- ";
const BULLET_CONTINUATION: &str = "  ";
const TAB_COLUMNS: usize = 8;

/// Return the part of `line` before its first alphabetic character.
///
/// A line without any alphabetic character has no prefix.
///
/// # Examples
///
/// ```
/// use blockreflow::codec::non_alphabetic_prefix;
///
/// assert_eq!(non_alphabetic_prefix("   // foo"), "   // ");
/// assert_eq!(non_alphabetic_prefix("-- 42"), "");
/// ```
#[must_use]
pub fn non_alphabetic_prefix(line: &str) -> &str {
    line.find(char::is_alphabetic).map_or("", |idx| &line[..idx])
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

fn compute_prefix(lines: &[String]) -> &str {
    match lines {
        [] => "",
        [only] => non_alphabetic_prefix(only),
        [first, rest @ ..] => {
            let shared = rest
                .iter()
                .fold(first.as_str(), |acc, line| common_prefix(acc, line));
            // Lines that begin with the same word must not lose it to the prefix.
            shared.trim_end_matches(char::is_alphabetic)
        }
    }
}

fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(idx, _)| &s[idx..])
}

/// Framing made of a prefix shared by all lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPrefix<'a> {
    lines: &'a [String],
    prefix: String,
    add_space: bool,
    markdown_bullet: bool,
}

impl<'a> CommonPrefix<'a> {
    /// Compute the shared framing of `lines`.
    #[must_use]
    pub fn new(lines: &'a [String]) -> Self {
        let mut prefix = compute_prefix(lines).to_string();

        // Blank comment lines often drop the space after the marker, which
        // hides it from the common prefix. Short lines do not vote.
        let spaced = format!("{prefix} ");
        let add_space = lines
            .iter()
            .all(|line| line.len() <= prefix.len() || line.starts_with(&spaced));

        let markdown_bullet = if prefix.ends_with(INDENTED_BULLET) {
            prefix.truncate(prefix.len() - BULLET_MARKER.len());
            true
        } else if prefix.ends_with(BULLET_CONTINUATION) {
            let marker = format!("{prefix}{BULLET_MARKER}");
            let continuation = format!("{prefix}{BULLET_CONTINUATION}");
            lines
                .iter()
                .all(|line| line.starts_with(&marker) || line.starts_with(&continuation))
        } else {
            false
        };

        Self {
            lines,
            prefix,
            add_space,
            markdown_bullet,
        }
    }

    /// The prefix codec recognises every block.
    #[must_use]
    pub fn detect(lines: &'a [String]) -> Option<Self> { Some(Self::new(lines)) }

    /// The framing prefix, without any bullet marker.
    #[must_use]
    pub fn prefix(&self) -> &str { &self.prefix }

    /// Whether a space is inserted between the prefix and the content.
    #[must_use]
    pub fn adds_space(&self) -> bool { self.add_space }

    /// Whether the block is a Markdown bullet item.
    #[must_use]
    pub fn is_markdown_bullet(&self) -> bool { self.markdown_bullet }
}

impl Codec for CommonPrefix<'_> {
    fn inner_contents(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                let rest = line.strip_prefix(self.prefix.as_str()).unwrap_or(line);
                let rest = if self.markdown_bullet {
                    skip_chars(rest, BULLET_MARKER.len())
                } else {
                    rest
                };
                rest.to_string()
            })
            .collect()
    }

    fn apply(&self, lines: &[String]) -> Vec<String> {
        let prefix = self.prefix.as_str();
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if line == prefix {
                    line.clone()
                } else if self.add_space {
                    format!("{prefix} {line}")
                } else if self.markdown_bullet {
                    let marker = if i == 0 {
                        BULLET_MARKER
                    } else {
                        BULLET_CONTINUATION
                    };
                    format!("{prefix}{marker}{line}")
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect()
    }

    fn wrap_width(&self) -> usize {
        let columns: usize = self
            .prefix
            .chars()
            .map(|ch| if ch == '\t' { TAB_COLUMNS } else { 1 })
            .sum();
        if self.markdown_bullet {
            columns + BULLET_MARKER.len()
        } else {
            columns
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("   // foo", "   // ")]
    #[case("# heading", "# ")]
    #[case("foo", "")]
    #[case("// 123", "")]
    #[case("", "")]
    fn finds_non_alphabetic_prefix(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(non_alphabetic_prefix(line), expected);
    }

    #[test]
    fn shared_leading_word_is_not_framing() {
        let lines = string_vec!["// foo bar", "// foobar baz"];
        let c = CommonPrefix::new(&lines);
        assert_eq!(c.prefix(), "// ");
        assert_eq!(c.inner_contents(), string_vec!["foo bar", "foobar baz"]);
    }

    #[test]
    fn restores_space_omitted_on_blank_lines() {
        let lines = string_vec!["// foo", "//", "// bar"];
        let c = CommonPrefix::new(&lines);
        assert_eq!(c.prefix(), "//");
        assert!(c.adds_space());
        assert_eq!(c.apply(&string_vec!["foo bar"]), string_vec!["// foo bar"]);
    }

    #[test]
    fn bare_prefix_lines_are_left_alone() {
        let lines = string_vec!["// foo", "//", "// bar"];
        let c = CommonPrefix::new(&lines);
        assert_eq!(c.apply(&string_vec!["//"]), string_vec!["//"]);
    }

    #[test]
    fn indented_bullet_is_trimmed_from_prefix() {
        let lines = string_vec!["  - foo bar"];
        let c = CommonPrefix::new(&lines);
        assert!(c.is_markdown_bullet());
        assert_eq!(c.prefix(), "  ");
        assert_eq!(c.wrap_width(), 4);
        assert_eq!(c.inner_contents(), string_vec!["foo bar"]);
        assert_eq!(
            c.apply(&string_vec!["foo", "bar"]),
            string_vec!["  - foo", "    bar"]
        );
    }

    #[test]
    fn bullet_continuation_lines_are_recognised() {
        let lines = string_vec!["  - foo bar", "    baz qux"];
        let c = CommonPrefix::new(&lines);
        assert!(c.is_markdown_bullet());
        assert_eq!(c.prefix(), "  ");
        assert_eq!(c.inner_contents(), string_vec!["foo bar", "baz qux"]);
    }

    #[test]
    fn tabs_count_as_eight_columns() {
        let lines = string_vec!["\t# foo", "\t# bar"];
        let c = CommonPrefix::new(&lines);
        assert_eq!(c.prefix(), "\t# ");
        assert_eq!(c.wrap_width(), 10);
    }

    #[test]
    fn round_trips_without_repacking() {
        let lines = string_vec!["    # foo", "    # bar baz"];
        let c = CommonPrefix::new(&lines);
        assert_eq!(c.apply(&c.inner_contents()), lines);
    }

    #[test]
    fn empty_block_has_empty_prefix() {
        let c = CommonPrefix::new(&[]);
        assert_eq!(c.prefix(), "");
        assert!(c.inner_contents().is_empty());
    }
}
