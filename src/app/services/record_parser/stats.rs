//! Parsing statistics and result structures for dataset processing
//!
//! This module provides types for tracking how many rows were read, kept and
//! skipped, and for handing parsed observations to the date index.

use crate::app::models::Observation;
use crate::constants::MAX_RECORDED_ERRORS;
use serde::{Deserialize, Serialize};

/// Parsing result with observations and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed observations in source row order
    pub observations: Vec<Observation>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of observations successfully parsed
    pub observations_parsed: usize,

    /// Number of records skipped due to errors
    pub records_skipped: usize,

    /// First parsing errors for debugging (bounded)
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a skipped record and keep its message while under the cap
    pub fn record_skip(&mut self, message: String) {
        self.records_skipped += 1;
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors.push(message);
        }
    }

    /// Share of records kept as observations, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.observations_parsed as f64 / self.total_records as f64) * 100.0
        }
    }
}
