//! # Elections Directory Store
//!
//! One JSON file per election. A scan lists the directory, skips
//! subdirectories, and decodes every remaining file. A file that cannot be
//! inspected, read, or decoded becomes a [`FileFailure`] and the scan moves
//! on. Only an unlistable directory fails the scan as a whole.
//!
//! Entries are visited in filename byte order so two scans of an unchanged
//! directory produce the same catalog on every platform.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use elcat_core::safe_path;
use elcat_core::{CatalogEntry, Election, ReadError, RecordError, ScanError};

/// A file skipped during a scan.
#[derive(Debug)]
pub struct FileFailure {
    /// Filename as listed (lossily converted if not UTF-8).
    pub file_name: String,
    /// Why it was skipped.
    pub error: RecordError,
}

/// Result of one successful directory scan.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Decoded records in listing order.
    pub entries: Vec<CatalogEntry>,
    /// Files that were skipped.
    pub failures: Vec<FileFailure>,
}

/// The elections source directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store over `dir`. Nothing is read until [`FileStore::scan`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The source directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scan the directory and decode every file in it.
    ///
    /// Blocking; run it on a blocking-capable thread from async code.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DirectoryUnreadable`] only when the directory
    /// itself cannot be listed. Per-file problems land in
    /// [`ScanOutcome::failures`].
    pub fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let listing =
            std::fs::read_dir(&self.dir).map_err(|source| ScanError::DirectoryUnreadable {
                path: self.dir.clone(),
                source,
            })?;

        let mut outcome = ScanOutcome::default();
        let mut names: Vec<OsString> = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(e) => {
                    tracing::warn!(dir = %self.dir.display(), error = %e, "failed to read directory entry");
                    outcome.failures.push(FileFailure {
                        file_name: String::new(),
                        error: RecordError::Inspect(e),
                    });
                }
            }
        }
        names.sort();

        for name in names {
            match self.load(&name) {
                Ok(Some(entry)) => outcome.entries.push(entry),
                Ok(None) => {}
                Err(error) => {
                    let file_name = name.to_string_lossy().into_owned();
                    tracing::warn!(
                        dir = %self.dir.display(),
                        file = %file_name,
                        error = %error,
                        "skipping election file"
                    );
                    outcome.failures.push(FileFailure { file_name, error });
                }
            }
        }

        tracing::debug!(
            dir = %self.dir.display(),
            records = outcome.entries.len(),
            failures = outcome.failures.len(),
            "scanned elections directory"
        );
        Ok(outcome)
    }

    /// Load one listed name. `Ok(None)` means it is a directory.
    fn load(&self, name: &OsString) -> Result<Option<CatalogEntry>, RecordError> {
        let path = self.dir.join(name);
        let metadata = std::fs::metadata(&path).map_err(RecordError::Inspect)?;
        if metadata.is_dir() {
            return Ok(None);
        }
        let file_name = name
            .to_str()
            .ok_or_else(|| RecordError::NonUtf8Name(name.to_string_lossy().into_owned()))?;
        let bytes = std::fs::read(&path).map_err(RecordError::Read)?;
        let election = Election::from_json_slice(&bytes)?;
        Ok(Some(CatalogEntry::new(file_name, election)))
    }

    /// Read a backing file verbatim.
    ///
    /// The name is resolved through [`safe_path::resolve`] first. Any I/O
    /// failure, including the file having vanished since the last scan, is
    /// reported as [`ReadError::FileRead`].
    pub async fn read_raw(&self, file_name: &str) -> Result<Vec<u8>, ReadError> {
        let path = safe_path::resolve(&self.dir, file_name)?;
        tokio::fs::read(&path)
            .await
            .map_err(|source| ReadError::FileRead {
                file: file_name.to_string(),
                source,
            })
    }
}
