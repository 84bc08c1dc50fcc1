//! Swappable current snapshot of the date index
//!
//! Readers clone an `Arc<DateIndex>` under a briefly held read lock and then
//! work without any lock. Loads are serialized by an async gate so concurrent
//! first accesses share one load, and a reload swaps the pointer only after the
//! replacement has been built successfully.
//!
//! Building an index reads and parses every source file, so it runs on the
//! blocking thread pool rather than on an async worker.

use super::{DateIndex, LoadStats};
use crate::config::IndexConfig;
use crate::error::LoadError;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Owner of the current [`DateIndex`] snapshot
#[derive(Debug)]
pub struct DatasetIndex {
    config: IndexConfig,
    snapshot: RwLock<Option<Arc<DateIndex>>>,
    load_gate: Mutex<()>,
    generation: AtomicU64,
}

impl DatasetIndex {
    /// Create an index that loads on first access
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            snapshot: RwLock::new(None),
            load_gate: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Create an index and load it immediately
    pub async fn load(config: IndexConfig) -> Result<Self, LoadError> {
        let index = Self::new(config);
        index.snapshot().await?;
        Ok(index)
    }

    /// Create an index around an already built snapshot
    pub fn from_index(config: IndexConfig, index: DateIndex) -> Self {
        Self {
            config,
            snapshot: RwLock::new(Some(Arc::new(index))),
            load_gate: Mutex::new(()),
            generation: AtomicU64::new(1),
        }
    }

    /// Configuration used for loads and reloads
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Current snapshot, loading the dataset on first access
    ///
    /// Concurrent first accesses wait on the load gate and reuse the snapshot
    /// built by whichever caller got there first. A failed load is not cached,
    /// so a later call tries again.
    pub async fn snapshot(&self) -> Result<Arc<DateIndex>, LoadError> {
        if let Some(current) = self.current() {
            return Ok(current);
        }

        let _gate = self.load_gate.lock().await;

        // Another caller may have finished loading while we waited
        if let Some(current) = self.current() {
            debug!("Reusing snapshot loaded by a concurrent caller");
            return Ok(current);
        }

        let index = Arc::new(self.build().await?);
        *self.snapshot.write() = Some(Arc::clone(&index));
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "Date index ready (generation {}, {} observations over {} dates)",
            generation,
            index.observation_count(),
            index.date_count()
        );

        Ok(index)
    }

    /// Rebuild the index from the source and swap it in
    ///
    /// The replacement is built without holding the snapshot lock. If the
    /// rebuild fails the previous snapshot stays in effect.
    pub async fn reload(&self) -> Result<LoadStats, LoadError> {
        let _gate = self.load_gate.lock().await;
        info!("Reloading dataset from {}", self.config.source.display());

        let index = match self.build().await {
            Ok(index) => Arc::new(index),
            Err(e) => {
                warn!("Reload failed, keeping previous snapshot: {}", e);
                return Err(e);
            }
        };

        let stats = index.load_stats().clone();
        let previous = self.snapshot.write().replace(Arc::clone(&index));
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "Swapped in date index generation {} from {} (replaced existing: {})",
            generation,
            index.source().display(),
            previous.is_some()
        );

        Ok(stats)
    }

    /// Build a fresh index from the configured source on the blocking pool
    async fn build(&self) -> Result<DateIndex, LoadError> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || DateIndex::load(&config)).await?
    }

    /// Current snapshot without triggering a load
    pub fn current(&self) -> Option<Arc<DateIndex>> {
        self.snapshot.read().clone()
    }

    /// Check if a snapshot has been loaded
    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// Number of successful builds so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
