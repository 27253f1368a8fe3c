//! Document read / overwrite
//!
//! The target is read fully, merged in memory and written back in one go.
//! No temp file, no backup, no locking: a single writer is assumed.

use crate::document::splice::merge_fragment;
use crate::document::{DocumentError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// What `update_document` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Markers were missing and got appended
    pub appended_markers: bool,
    /// Bytes written back
    pub bytes_written: usize,
    /// Content changed compared to what was on disk
    pub changed: bool,
    /// False when the end marker was missing and nothing was written
    pub replaced: bool,
}

/// Read the whole document as UTF-8
pub fn read_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(DocumentError::NotFound(path.display().to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Overwrite the document with `content`
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Splice `fragment` between the markers of the document at `path`
///
/// A start marker without an end marker leaves the file untouched and
/// reports `replaced: false`.
pub fn update_document(path: &Path, fragment: &str) -> Result<UpdateReport> {
    let original = read_document(path)?;
    let merged = merge_fragment(&original, fragment)?;

    if !merged.replaced {
        warn!(path = %path.display(), "{}", DocumentError::MissingEndMarker);
        return Ok(UpdateReport {
            appended_markers: false,
            bytes_written: 0,
            changed: false,
            replaced: false,
        });
    }

    if merged.appended_markers {
        info!(path = %path.display(), "Markers not found, appended an empty pair");
    }

    write_document(path, &merged.content)?;

    Ok(UpdateReport {
        appended_markers: merged.appended_markers,
        bytes_written: merged.content.len(),
        changed: merged.content != original,
        replaced: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_document(&temp_dir.path().join("README.md"));
        assert!(matches!(result, Err(DocumentError::NotFound(_))));
    }

    #[test]
    fn test_update_reports_change() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "# Title\n").unwrap();

        let first = update_document(&path, "body").unwrap();
        assert!(first.appended_markers);
        assert!(first.changed);

        let second = update_document(&path, "body").unwrap();
        assert!(!second.appended_markers);
        assert!(!second.changed);
        assert_eq!(second.bytes_written, fs::read_to_string(&path).unwrap().len());
    }

    #[test]
    fn test_missing_end_marker_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        let original = "# Title\n<!-- NYT_STATS_START -->\ndangling\n";
        fs::write(&path, original).unwrap();

        let report = update_document(&path, "body").unwrap();
        assert!(!report.replaced);
        assert!(!report.changed);
        assert_eq!(report.bytes_written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_document(temp_dir.path());
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }
}
