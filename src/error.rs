//! Error type shared by the selection, packing and reflow stages.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ReflowError> = std::result::Result<T, E>;

/// Broad classification of a [`ReflowError`].
///
/// Hosts usually only care whether the caller supplied bad input or the crate
/// hit a logic defect, so every variant maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Selection offsets are inverted, out of bounds or split a character.
    InvalidRange,
    /// The lines or width handed to the reflower cannot be processed.
    InvalidArgument,
    /// No codec accepted the block.
    Internal,
}

/// Errors raised while mapping a selection or reflowing a block.
///
/// Every variant is detected before any output is produced, so callers can
/// treat a failure as "leave the document untouched".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflowError {
    /// The selection does not describe a valid range of the document.
    #[error("invalid selection {start}..{end} for a document of {len} bytes")]
    InvalidRange {
        /// Selection start offset.
        start: usize,
        /// Selection end offset.
        end: usize,
        /// Document length in bytes.
        len: usize,
    },

    /// A line passed to the reflower still carries a line terminator.
    #[error("line {index} contains a line terminator")]
    EmbeddedTerminator {
        /// Index of the offending line.
        index: usize,
    },

    /// The reflower was given no lines at all.
    #[error("no lines to reflow")]
    EmptyBlock,

    /// The packer was asked for lines narrower than one column.
    #[error("wrap width must be at least 1")]
    ZeroWidth,

    /// The framing leaves no room for content at the target width.
    #[error("framing needs {framing} columns, leaving no room within width {width}")]
    WidthTooNarrow {
        /// Requested target width.
        width: usize,
        /// Columns consumed by the detected framing.
        framing: usize,
    },

    /// No codec accepted the lines.
    #[error("no framing codec accepted the block")]
    NoCodec,
}

impl ReflowError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::EmbeddedTerminator { .. }
            | Self::EmptyBlock
            | Self::ZeroWidth
            | Self::WidthTooNarrow { .. } => ErrorKind::InvalidArgument,
            Self::NoCodec => ErrorKind::Internal,
        }
    }
}
