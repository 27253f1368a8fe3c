//! Marker-region splice
//!
//! Pure string operations; file access lives in `document::io`.

use crate::document::{DocumentError, Result, END_MARKER, START_MARKER};
use std::borrow::Cow;

/// Outcome of merging a fragment into document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// Full document text after the merge
    pub content: String,
    /// Whether an empty marker pair had to be appended first
    pub appended_markers: bool,
    /// False when START had no END after it; `content` is then the input
    pub replaced: bool,
}

/// Append an empty marker pair when the start marker is absent
///
/// Tail becomes: original, `\n\n`, START, `\n`, END, `\n`.
pub fn ensure_markers(content: &str) -> Cow<'_, str> {
    if content.contains(START_MARKER) {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(format!("{}\n\n{}\n{}\n", content, START_MARKER, END_MARKER))
    }
}

/// Replace everything between the first START and the first END after it
///
/// The result holds `START\n{fragment}\nEND` at that position; bytes
/// before START and from END onwards are untouched.
pub fn splice_region(content: &str, fragment: &str) -> Result<String> {
    let start = content
        .find(START_MARKER)
        .ok_or(DocumentError::MissingStartMarker)?;
    let interior_start = start + START_MARKER.len();
    let end = content[interior_start..]
        .find(END_MARKER)
        .map(|offset| interior_start + offset)
        .ok_or(DocumentError::MissingEndMarker)?;

    let mut out = String::with_capacity(content.len() + fragment.len() + 2);
    out.push_str(&content[..interior_start]);
    out.push('\n');
    out.push_str(fragment);
    out.push('\n');
    out.push_str(&content[end..]);
    Ok(out)
}

/// `ensure_markers` followed by `splice_region`
///
/// A START with no END after it is not an error here: the text comes back
/// unchanged with `replaced` unset.
pub fn merge_fragment(content: &str, fragment: &str) -> Result<Merged> {
    let prepared = ensure_markers(content);
    let appended_markers = matches!(prepared, Cow::Owned(_));
    match splice_region(&prepared, fragment) {
        Ok(content) => Ok(Merged {
            content,
            appended_markers,
            replaced: true,
        }),
        Err(DocumentError::MissingEndMarker) => Ok(Merged {
            content: prepared.into_owned(),
            appended_markers,
            replaced: false,
        }),
        Err(err) => Err(err),
    }
}
