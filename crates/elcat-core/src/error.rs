//! # Error Types — Catalog Error Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Scope of each error
//!
//! - [`ScanError`] aborts one refresh cycle. The previous snapshot stays
//!   current.
//! - [`RecordError`] skips one file. The rest of the scan continues.
//! - [`PathError`] rejects a name before any filesystem access.
//! - [`ReadError`] is what a single read request can fail with.

use std::path::PathBuf;

use thiserror::Error;

/// Scan-level failure: the source directory itself could not be listed.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Listing the directory failed.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory that was being scanned.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Per-file failure during a scan.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The directory entry could not be inspected.
    #[error("cannot inspect directory entry: {0}")]
    Inspect(#[source] std::io::Error),

    /// The filename is not valid UTF-8 and cannot be used as a lookup value.
    #[error("filename is not valid UTF-8: {0}")]
    NonUtf8Name(String),

    /// Reading the file contents failed.
    #[error("cannot read file: {0}")]
    Read(#[source] std::io::Error),

    /// The contents are not a valid election record.
    #[error("invalid election record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A name was refused by safe path resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The name would escape, or does not name a file in, the base directory.
    #[error("invalid path {name:?}: {reason}")]
    InvalidPath {
        /// The name as supplied by the caller.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Failure of a single read request.
#[derive(Error, Debug)]
pub enum ReadError {
    /// No entry is known under this key.
    #[error("not found: {0}")]
    NotFound(String),

    /// The supplied name was rejected before touching the filesystem.
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// The entry is known but its backing file could not be read.
    #[error("cannot read {file}: {source}")]
    FileRead {
        /// Filename that was resolved.
        file: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_names_the_directory() {
        let err = ScanError::DirectoryUnreadable {
            path: PathBuf::from("/srv/elections"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/elections"), "got: {msg}");
        assert!(msg.contains("gone"), "got: {msg}");
    }

    #[test]
    fn path_error_converts_into_read_error() {
        let err: ReadError = PathError::InvalidPath {
            name: "../x".into(),
            reason: "parent directory segment",
        }
        .into();
        assert!(matches!(err, ReadError::InvalidPath(_)));
        assert!(err.to_string().contains("../x"));
    }

    #[test]
    fn decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RecordError::from(serde_err);
        assert!(err.to_string().starts_with("invalid election record"));
    }
}
