//! Target document handling
//!
//! The synchronizer owns the region between two literal HTML comments.
//! Everything outside them is preserved byte-for-byte.

mod io;
mod splice;

pub use io::{read_document, update_document, write_document, UpdateReport};
pub use splice::{ensure_markers, merge_fragment, splice_region, Merged};

use thiserror::Error;

/// Start of the owned region
pub const START_MARKER: &str = "<!-- NYT_STATS_START -->";
/// End of the owned region
pub const END_MARKER: &str = "<!-- NYT_STATS_END -->";

/// Errors that can occur while updating the document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Start marker <!-- NYT_STATS_START --> not found")]
    MissingStartMarker,

    #[error("End marker <!-- NYT_STATS_END --> not found after start marker")]
    MissingEndMarker,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
