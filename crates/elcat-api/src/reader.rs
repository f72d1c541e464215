//! # Catalog Reader
//!
//! The read-side contract the HTTP layer is written against. Each call
//! takes the snapshot lock only to clone the current snapshot or copy one
//! filename, then releases it before any file I/O.

use std::sync::Arc;

use elcat_core::{CatalogHandle, CatalogIndex, ReadError, ScanError};
use elcat_store::{AssetBundle, FileStore, SvgAsset};

/// Read access to the catalog and the asset bundle.
#[derive(Debug, Clone)]
pub struct CatalogReader {
    catalog: CatalogHandle,
    store: FileStore,
    assets: AssetBundle,
}

impl CatalogReader {
    /// Create a reader over the given snapshot owner and directories.
    pub fn new(catalog: CatalogHandle, store: FileStore, assets: AssetBundle) -> Self {
        Self {
            catalog,
            store,
            assets,
        }
    }

    /// The current snapshot. Empty until the first successful scan.
    pub fn list_catalog(&self) -> Arc<CatalogIndex> {
        self.catalog.snapshot()
    }

    /// The exact on-disk bytes of the file backing `uid`.
    ///
    /// # Errors
    ///
    /// - [`ReadError::NotFound`] if the current snapshot has no such identifier.
    /// - [`ReadError::InvalidPath`] if the recorded filename fails resolution.
    /// - [`ReadError::FileRead`] if the file vanished or cannot be read.
    pub async fn fetch_raw(&self, uid: &str) -> Result<Vec<u8>, ReadError> {
        let file_name = self
            .catalog
            .file_for(uid)
            .ok_or_else(|| ReadError::NotFound(uid.to_string()))?;
        self.store.read_raw(&file_name).await
    }

    /// One SVG asset, with the precise failure if it cannot be served.
    pub async fn fetch_asset(&self, name: &str) -> Result<SvgAsset, ReadError> {
        self.assets.fetch(name).await
    }

    /// One SVG asset, or the placeholder for it.
    pub async fn fetch_asset_or_placeholder(&self, name: &str) -> SvgAsset {
        self.assets.fetch_or_placeholder(name).await
    }

    /// Every SVG in the asset directory.
    pub async fn list_assets(&self) -> Result<Vec<SvgAsset>, ScanError> {
        self.assets.fetch_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elcat_core::{CatalogEntry, Election, ElectionUid};
    use std::fs;

    fn reader_over(dir: &std::path::Path) -> (CatalogReader, CatalogHandle) {
        let catalog = CatalogHandle::new();
        let reader = CatalogReader::new(
            catalog.clone(),
            FileStore::new(dir),
            AssetBundle::new(dir.join("svgs")),
        );
        (reader, catalog)
    }

    #[tokio::test]
    async fn unknown_identifier_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let (reader, _) = reader_over(tmp.path());
        assert!(matches!(
            reader.fetch_raw("missing").await,
            Err(ReadError::NotFound(uid)) if uid == "missing"
        ));
    }

    #[tokio::test]
    async fn known_identifier_returns_file_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let body = br#"{"electionUId":"e1","name":"One","ballots":[]}"#;
        fs::write(tmp.path().join("one.json"), body).unwrap();
        let (reader, catalog) = reader_over(tmp.path());
        catalog.publish(CatalogIndex::build(vec![CatalogEntry::new(
            "one.json",
            Election::new(ElectionUid::new("e1").unwrap(), "One"),
        )]));

        assert_eq!(reader.fetch_raw("e1").await.unwrap(), body);
        assert_eq!(reader.list_catalog().len(), 1);
    }

    #[tokio::test]
    async fn traversal_in_a_recorded_filename_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let (reader, catalog) = reader_over(tmp.path());
        catalog.publish(CatalogIndex::build(vec![CatalogEntry::new(
            "../outside.json",
            Election::new(ElectionUid::new("evil").unwrap(), ""),
        )]));

        assert!(matches!(
            reader.fetch_raw("evil").await,
            Err(ReadError::InvalidPath(_))
        ));
    }
}
