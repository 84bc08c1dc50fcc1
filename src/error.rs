//! Error handling for dataset loading and query operations.
//!
//! Row-level failures are recovered where they occur (the row is skipped and
//! counted), load failures are fatal to a single load attempt, and query errors
//! signal caller misuse. "No data for a date" is not an error and is reported
//! as `None` by the query operations.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Reason a single dataset row could not be turned into an observation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("line {line}: missing or malformed date in column '{column}'")]
    MissingDate { line: u64, column: String },

    #[error("line {line}: malformed record - {reason}")]
    MalformedRecord { line: u64, reason: String },
}

/// Failure of a whole load or reload attempt
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dataset source unavailable: {path} - {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error(
        "Dataset at {path} has no usable observations \
         ({records_read} records read, {records_skipped} skipped)"
    )]
    EmptyDataset {
        path: PathBuf,
        records_read: usize,
        records_skipped: usize,
    },

    #[error("Dataset load task did not complete: {reason}")]
    Interrupted { reason: String },
}

impl LoadError {
    /// Create a source unavailable error
    pub fn source_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<tokio::task::JoinError> for LoadError {
    fn from(error: tokio::task::JoinError) -> Self {
        let reason = if error.is_panic() {
            "loader panicked".to_string()
        } else {
            error.to_string()
        };
        Self::Interrupted { reason }
    }
}

/// Rejected query
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Dataset could not be loaded: {0}")]
    Load(#[from] LoadError),
}
