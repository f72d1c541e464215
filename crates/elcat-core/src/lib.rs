//! # elcat-core — Foundational Types for the Election Catalog
//!
//! The election catalog serves a read-mostly set of election records that
//! live as one JSON file per election in a source directory. This crate holds
//! the pieces every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** [`ElectionUid`] is validated at decode time.
//!    An election without an identifier never reaches the catalog.
//!
//! 2. **Immutable snapshots.** A [`CatalogIndex`] is built in one piece from
//!    one directory scan and never patched afterwards. Its record list and
//!    its identifier lookup table always come from the same scan.
//!
//! 3. **Swap, don't mutate.** [`CatalogHandle`] owns the single current
//!    snapshot. Readers clone an `Arc` under a read lock and release it
//!    before any I/O; the refresher takes the write lock only to swap.
//!
//! 4. **One gate for filesystem names.** Every externally supplied filename
//!    passes through [`safe_path::resolve`] before it is joined to a base
//!    directory.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `elcat-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod election;
pub mod error;
pub mod identity;
pub mod safe_path;

// Re-export primary types for ergonomic imports.
pub use catalog::{CatalogEntry, CatalogHandle, CatalogIndex};
pub use election::Election;
pub use error::{PathError, ReadError, RecordError, ScanError};
pub use identity::{ElectionUid, IdentifierError};
