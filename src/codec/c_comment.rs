//! C-style block comments.
//!
//! The first line must open the comment with `/*` and every following line
//! must start with `*` after optional indentation. A closing `*/` is left in
//! the content and gets repacked along with the words.

use std::sync::LazyLock;

use regex::Regex;

use super::Codec;

static OPENING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)/\*").expect("comment opener regex should compile"));

static CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\*").expect("comment continuation regex should compile"));

/// Framing for `/* … */` comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CComment {
    stripped: Vec<String>,
    indent: usize,
}

impl CComment {
    /// Recognise a block comment, returning `None` if any line breaks the
    /// pattern.
    #[must_use]
    pub fn detect(lines: &[String]) -> Option<Self> {
        let (first, rest) = lines.split_first()?;
        let mut comment = Self {
            stripped: Vec::with_capacity(lines.len()),
            indent: usize::MAX,
        };
        comment.prune_line(&OPENING_RE, first)?;
        for line in rest {
            comment.prune_line(&CONTINUATION_RE, line)?;
        }
        Some(comment)
    }

    fn prune_line(&mut self, re: &Regex, line: &str) -> Option<()> {
        let caps = re.captures(line)?;
        let marker = caps.get(0)?;
        let leading = caps.get(1)?;
        self.stripped.push(line[marker.end()..].to_string());
        self.indent = self.indent.min(leading.as_str().chars().count());
        Some(())
    }

    /// Smallest indentation seen before the comment markers.
    #[must_use]
    pub fn indent(&self) -> usize { self.indent }
}

impl Codec for CComment {
    fn inner_contents(&self) -> Vec<String> { self.stripped.clone() }

    fn apply(&self, lines: &[String]) -> Vec<String> {
        let pad = " ".repeat(self.indent);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let marker = if i == 0 { "/* " } else { " * " };
                format!("{pad}{marker}{line}")
            })
            .collect()
    }

    // A space always follows the marker on output, even if the input had none.
    fn wrap_width(&self) -> usize { self.indent + 1 }
}
