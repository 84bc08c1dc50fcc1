//! Date index load statistics
//!
//! Diagnostics gathered while building a [`DateIndex`](super::DateIndex).

use crate::app::services::record_parser::ParseStats;
use crate::constants::MAX_RECORDED_ERRORS;
use std::time::Duration;

/// Statistics about the dataset loading process
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Number of source files read
    pub files_processed: usize,

    /// Total number of data records found
    pub total_records: usize,

    /// Number of observations placed in the index
    pub observations_indexed: usize,

    /// Number of records skipped because they could not be parsed
    pub records_skipped: usize,

    /// Number of distinct dates in the index
    pub distinct_dates: usize,

    /// Time taken to build the index
    pub load_duration: Duration,

    /// First row-level errors encountered (bounded)
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            files_processed: 0,
            total_records: 0,
            observations_indexed: 0,
            records_skipped: 0,
            distinct_dates: 0,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Fold the statistics of one parsed file into the totals
    pub fn add_file(&mut self, file_stats: &ParseStats) {
        self.files_processed += 1;
        self.total_records += file_stats.total_records;
        self.observations_indexed += file_stats.observations_parsed;
        self.records_skipped += file_stats.records_skipped;

        let room = MAX_RECORDED_ERRORS.saturating_sub(self.errors.len());
        self.errors
            .extend(file_stats.errors.iter().take(room).cloned());
    }

    /// Calculate the skip rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_skipped as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Calculate the loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.total_records as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Check if any records were skipped during loading
    pub fn has_skipped(&self) -> bool {
        self.records_skipped > 0
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Processed {} files, indexed {} observations over {} dates \
             ({} skipped, {:.1}%) in {:.2}s",
            self.files_processed,
            self.observations_indexed,
            self.distinct_dates,
            self.records_skipped,
            self.skip_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
