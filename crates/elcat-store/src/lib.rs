//! # elcat-store — Filesystem Access for the Election Catalog
//!
//! Everything that touches the disk lives here:
//!
//! - [`FileStore`] scans the elections directory into [`elcat_core::CatalogEntry`]
//!   values, collecting per-file failures instead of aborting, and reads a
//!   backing file back byte for byte.
//! - [`AssetBundle`] serves SVG files from the asset directory and
//!   substitutes a generated placeholder when one cannot be served.
//!
//! All caller-supplied names go through [`elcat_core::safe_path::resolve`].

pub mod assets;
pub mod file_store;

pub use assets::{placeholder_svg, AssetBundle, SvgAsset, SVG_EXTENSION};
pub use file_store::{FileFailure, FileStore, ScanOutcome};
