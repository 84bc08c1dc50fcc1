//! Date-keyed index over the loaded dataset
//!
//! This module builds an ordered mapping from calendar date to the observations
//! recorded on that date, and owns the swappable snapshot that queries read.
//!
//! ## Architecture
//!
//! - [`loader`] - Source discovery, parsing and bucketing by date
//! - [`metadata`] - Load statistics
//! - [`snapshot`] - Lazily loaded, atomically replaceable current index

use crate::app::models::Observation;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub mod loader;
pub mod metadata;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use snapshot::DatasetIndex;

/// Immutable index of observations keyed by calendar date
///
/// Buckets hold observations in source row order and are never empty. An index
/// is built once per dataset version and only read afterwards; reloading builds
/// a new index rather than mutating this one.
#[derive(Debug, Clone)]
pub struct DateIndex {
    /// Observations bucketed by date, ascending
    pub(crate) by_date: BTreeMap<NaiveDate, Vec<Observation>>,

    /// Dataset location this index was built from
    pub(crate) source: PathBuf,

    /// Statistics of the load that built this index
    pub(crate) stats: LoadStats,
}

impl DateIndex {
    /// Build an index from observations already in source order
    pub fn from_observations<I>(source: impl Into<PathBuf>, observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut by_date: BTreeMap<NaiveDate, Vec<Observation>> = BTreeMap::new();
        let mut indexed = 0;
        for observation in observations {
            by_date.entry(observation.date).or_default().push(observation);
            indexed += 1;
        }

        let stats = LoadStats {
            total_records: indexed,
            observations_indexed: indexed,
            distinct_dates: by_date.len(),
            ..LoadStats::default()
        };

        Self {
            by_date,
            source: source.into(),
            stats,
        }
    }

    /// Observations recorded on a date, in source order
    pub fn get(&self, date: NaiveDate) -> Option<&[Observation]> {
        self.by_date.get(&date).map(Vec::as_slice)
    }

    /// All dates with observations, ascending
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.by_date.keys().copied().collect()
    }

    /// Earliest and latest dates with observations
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((*first, *last))
    }

    /// Number of distinct dates
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    /// Number of indexed observations
    pub fn observation_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    /// Dataset location this index was built from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Statistics of the load that built this index
    pub fn load_stats(&self) -> &LoadStats {
        &self.stats
    }
}
