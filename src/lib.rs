//! Reflow framed blocks of text.
//!
//! Given a document and a selection, the selection is widened to whole lines,
//! the framing around those lines is recognised (a `/* … */` comment, a shared
//! prefix such as `//` or `#`, or a Markdown bullet), the words are repacked to
//! the target width, and the framing is reapplied. The result is a
//! [`Replacement`] that can be spliced over the original lines.
//!
//! ```
//! use blockreflow::{LineAction, ReflowOptions};
//!
//! let doc = "  # alpha beta\n  # gamma\n";
//! let edit = LineAction::Reflow
//!     .replacement(doc, 0, doc.len(), &ReflowOptions { width: 12 })
//!     .unwrap();
//! assert_eq!(edit.apply_to(doc), "  # alpha\n  # beta\n  # gamma\n");
//! ```

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod action;
pub mod codec;
pub mod error;
pub mod io;
pub mod pack;
pub mod reflow;
pub mod selection;

pub use action::{LineAction, Replacement, sort_lines};
pub use codec::{CComment, Codec, CodecKind, CommonPrefix, Framing};
pub use error::{ErrorKind, ReflowError, Result};
pub use io::{SelectionBounds, process_document, rewrite};
pub use pack::pack;
pub use reflow::{DEFAULT_WIDTH, ReflowOptions, reflow, reflow_default};
pub use selection::{DocumentSelection, LineSpan};
