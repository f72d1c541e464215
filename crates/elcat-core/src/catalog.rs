//! # Catalog Snapshot and Handle
//!
//! [`CatalogIndex`] is one immutable view of the catalog, built from one
//! directory scan. [`CatalogHandle`] owns the single current snapshot and
//! swaps it wholesale on every successful refresh.
//!
//! ## Locking discipline
//!
//! The handle wraps `parking_lot::RwLock<Arc<..>>`. The lock is never held
//! across `.await` points or file I/O:
//!
//! - readers take the read lock just long enough to clone the `Arc` (or to
//!   copy one filename out of the lookup table);
//! - the refresher builds the new index first, then takes the write lock
//!   just long enough to replace the `Arc`.
//!
//! A reader that cloned the old snapshot keeps a complete, consistent view
//! until it drops its `Arc`, even if a refresh lands in the meantime.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::election::Election;
use crate::identity::ElectionUid;

/// One decoded file from a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Name of the backing file inside the source directory.
    pub file_name: String,
    /// The record decoded from it.
    pub election: Election,
}

impl CatalogEntry {
    /// Pair a filename with its decoded record.
    pub fn new(file_name: impl Into<String>, election: Election) -> Self {
        Self {
            file_name: file_name.into(),
            election,
        }
    }
}

/// Immutable catalog snapshot.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    records: Vec<Election>,
    files: HashMap<ElectionUid, String>,
}

impl CatalogIndex {
    /// An index with no records. Served until the first successful scan.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from scan output, preserving order.
    ///
    /// Every record is kept in `records`. When several entries share an
    /// identifier, the lookup table points at the last one's file.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let entries = entries.into_iter();
        let mut records = Vec::with_capacity(entries.size_hint().0);
        let mut files = HashMap::with_capacity(entries.size_hint().0);
        for CatalogEntry {
            file_name,
            election,
        } in entries
        {
            files.insert(election.election_uid.clone(), file_name);
            records.push(election);
        }
        Self { records, files }
    }

    /// Records in scan order.
    pub fn records(&self) -> &[Election] {
        &self.records
    }

    /// Backing filename for an identifier.
    pub fn file_for(&self, uid: &str) -> Option<&str> {
        self.files.get(uid).map(String::as_str)
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct identifiers in the lookup table.
    pub fn distinct_identifiers(&self) -> usize {
        self.files.len()
    }

    /// Records whose identifier was overwritten by a later file.
    pub fn duplicate_count(&self) -> usize {
        self.records.len() - self.files.len()
    }
}

struct Published {
    index: Arc<CatalogIndex>,
    generation: u64,
}

/// Cloneable owner of the current catalog snapshot.
///
/// Generation 0 is the empty index present before any publish.
#[derive(Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Published>>,
}

impl CatalogHandle {
    /// Create a handle holding the empty index.
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(Published {
                index: Arc::new(CatalogIndex::empty()),
                generation: 0,
            })),
        }
    }

    /// Clone out the current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        Arc::clone(&self.current.read().index)
    }

    /// Copy the backing filename for `uid` out of the current snapshot.
    pub fn file_for(&self, uid: &str) -> Option<String> {
        self.current.read().index.file_for(uid).map(str::to_owned)
    }

    /// Replace the current snapshot. Returns the new generation number.
    pub fn publish(&self, index: CatalogIndex) -> u64 {
        let index = Arc::new(index);
        let mut guard = self.current.write();
        guard.index = index;
        guard.generation += 1;
        guard.generation
    }

    /// Number of snapshots published so far.
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.current.read();
        f.debug_struct("CatalogHandle")
            .field("generation", &guard.generation)
            .field("records", &guard.index.len())
            .finish()
    }
}
