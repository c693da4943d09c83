//! Framing codecs.
//!
//! A codec recognises the decoration wrapped around a block of lines (a C
//! block comment, a shared comment prefix, a Markdown bullet), strips it so the
//! words can be repacked, and puts it back afterwards. Codecs are built from
//! the lines they decode, so all derived state lives for exactly one reflow.

mod c_comment;
mod common_prefix;

pub use c_comment::CComment;
pub use common_prefix::{CommonPrefix, non_alphabetic_prefix};

use crate::error::{ReflowError, Result};

/// Strip and reapply the framing of a block of lines.
pub trait Codec {
    /// The lines with their framing removed, one entry per input line.
    fn inner_contents(&self) -> Vec<String>;

    /// Re-add the framing to `lines`, which need not match the input length.
    fn apply(&self, lines: &[String]) -> Vec<String>;

    /// Columns the framing occupies on a reapplied line.
    fn wrap_width(&self) -> usize;
}

/// The codecs known to the reflower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// `/* … */` block comments.
    CComment,
    /// Any shared prefix, including none at all.
    CommonPrefix,
}

impl CodecKind {
    /// Codecs in the order they are tried. The last entry always matches.
    pub const PRIORITY: [Self; 2] = [Self::CComment, Self::CommonPrefix];

    /// Build this codec for `lines` if it recognises their framing.
    #[must_use]
    pub fn detect(self, lines: &[String]) -> Option<Framing<'_>> {
        match self {
            Self::CComment => CComment::detect(lines).map(Framing::CComment),
            Self::CommonPrefix => CommonPrefix::detect(lines).map(Framing::CommonPrefix),
        }
    }
}

/// A codec that accepted a particular block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing<'a> {
    /// Block comment framing.
    CComment(CComment),
    /// Shared prefix framing.
    CommonPrefix(CommonPrefix<'a>),
}

impl Framing<'_> {
    /// Which codec produced this framing.
    #[must_use]
    pub fn kind(&self) -> CodecKind {
        match self {
            Self::CComment(_) => CodecKind::CComment,
            Self::CommonPrefix(_) => CodecKind::CommonPrefix,
        }
    }
}

impl Codec for Framing<'_> {
    fn inner_contents(&self) -> Vec<String> {
        match self {
            Self::CComment(c) => c.inner_contents(),
            Self::CommonPrefix(c) => c.inner_contents(),
        }
    }

    fn apply(&self, lines: &[String]) -> Vec<String> {
        match self {
            Self::CComment(c) => c.apply(lines),
            Self::CommonPrefix(c) => c.apply(lines),
        }
    }

    fn wrap_width(&self) -> usize {
        match self {
            Self::CComment(c) => c.wrap_width(),
            Self::CommonPrefix(c) => c.wrap_width(),
        }
    }
}

/// Pick the first codec in [`CodecKind::PRIORITY`] that accepts `lines`.
///
/// # Errors
/// Returns [`ReflowError::NoCodec`] if nothing matches, which cannot happen
/// while [`CodecKind::CommonPrefix`] closes the priority list.
pub fn select(lines: &[String]) -> Result<Framing<'_>> {
    let framing = CodecKind::PRIORITY
        .into_iter()
        .find_map(|kind| kind.detect(lines))
        .ok_or(ReflowError::NoCodec)?;
    log::debug!(
        "selected {:?} framing ({} columns) for {} lines",
        framing.kind(),
        framing.wrap_width(),
        lines.len()
    );
    Ok(framing)
}
