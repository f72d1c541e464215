//! # Catalog Refresh Scheduler
//!
//! Rebuilds the catalog from disk on a fixed interval, on its own task.
//!
//! ## Cycle
//!
//! 1. Scan the elections directory on a blocking worker thread.
//! 2. If the directory cannot be listed, log and stop here. The previous
//!    snapshot stays current.
//! 3. Build a fresh [`CatalogIndex`] from the scan and publish it with a
//!    single swap.
//!
//! The first cycle runs inline in [`RefreshScheduler::start`] so the server
//! never answers from a cold index. Later cycles run every `interval` until
//! the cancellation token fires. A cycle that overruns the interval delays
//! the next tick. There is no retry or backoff beyond the fixed cadence.

use std::time::Duration;

use elcat_core::{CatalogHandle, CatalogIndex, ScanError};
use elcat_store::FileStore;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// A refresh cycle that did not publish.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The directory could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The blocking scan task panicked or was cancelled.
    #[error("scan worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Summary of one published refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    /// Generation number of the published snapshot.
    pub generation: u64,
    /// Records in the snapshot, duplicates included.
    pub records: usize,
    /// Records whose identifier a later file overwrote.
    pub duplicates: usize,
    /// Files skipped because they could not be read or decoded.
    pub failures: usize,
}

/// Periodic directory scan that publishes into a [`CatalogHandle`].
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    store: FileStore,
    catalog: CatalogHandle,
    interval: Duration,
}

impl RefreshScheduler {
    /// Create a scheduler. Nothing runs until [`start`](Self::start).
    pub fn new(store: FileStore, catalog: CatalogHandle, interval: Duration) -> Self {
        Self {
            store,
            catalog,
            interval,
        }
    }

    /// Run one full cycle: scan, build, publish.
    ///
    /// # Errors
    ///
    /// Returns an error, without publishing, if the scan fails as a whole.
    pub async fn refresh_once(&self) -> Result<RefreshReport, RefreshError> {
        let store = self.store.clone();
        let outcome = tokio::task::spawn_blocking(move || store.scan()).await??;

        let failures = outcome.failures.len();
        let index = CatalogIndex::build(outcome.entries);
        let records = index.len();
        let duplicates = index.duplicate_count();
        let generation = self.catalog.publish(index);

        Ok(RefreshReport {
            generation,
            records,
            duplicates,
            failures,
        })
    }

    /// Run one cycle and log its outcome.
    async fn cycle(&self) {
        match self.refresh_once().await {
            Ok(report) => {
                tracing::info!(
                    dir = %self.store.dir().display(),
                    generation = report.generation,
                    records = report.records,
                    duplicates = report.duplicates,
                    failures = report.failures,
                    "election catalog refreshed"
                );
            }
            Err(e) => {
                tracing::error!(
                    dir = %self.store.dir().display(),
                    error = %e,
                    "election catalog refresh failed; keeping previous snapshot"
                );
            }
        }
    }

    /// Run the first cycle now, then spawn the periodic loop.
    ///
    /// Returns once the first cycle has finished, whether or not it
    /// published.
    pub async fn start(self, cancel: CancellationToken) -> JoinHandle<()> {
        self.cycle().await;
        self.spawn(cancel)
    }

    /// Spawn the periodic loop. The first tick fires one interval from now.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("election catalog refresh stopped");
                        break;
                    }
                    _ = ticker.tick() => self.cycle().await,
                }
            }
        })
    }
}
