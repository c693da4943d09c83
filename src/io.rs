//! File helpers for rewriting documents.

use std::{fs, io, path::Path};

use crate::{action::LineAction, error::Result, reflow::ReflowOptions};

/// Optional selection offsets; a missing bound extends to that end of the
/// document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionBounds {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl SelectionBounds {
    /// Resolve the bounds against a document of `len` bytes.
    #[must_use]
    pub fn resolve(self, len: usize) -> (usize, usize) {
        (self.start.unwrap_or(0), self.end.unwrap_or(len))
    }
}

/// Apply `action` to the selected lines of `text` and return the new
/// document.
///
/// # Errors
/// Returns an error if the selection is invalid or the action fails.
pub fn process_document(
    text: &str,
    action: LineAction,
    options: &ReflowOptions,
    bounds: SelectionBounds,
) -> Result<String> {
    let (start, end) = bounds.resolve(text.len());
    let edit = action.replacement(text, start, end, options)?;
    Ok(edit.apply_to(text))
}

/// Rewrite a file in place.
///
/// The file is only written once the new document has been computed.
///
/// # Errors
/// Returns an error if reading or writing the file fails, or with
/// [`io::ErrorKind::InvalidInput`] if the action rejects the selection.
pub fn rewrite(
    path: &Path,
    action: LineAction,
    options: &ReflowOptions,
    bounds: SelectionBounds,
) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let fixed = process_document(&text, action, options, bounds)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    fs::write(path, fixed)
}
