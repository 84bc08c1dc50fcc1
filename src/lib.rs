//! Ocean Data Index Library
//!
//! A Rust library for serving sea-surface temperature (SST), chlorophyll (CHL) and
//! sea-surface-height anomaly (SSHA) observations from a static tabular dataset,
//! indexed by observation date.
//!
//! This library provides tools for:
//! - Parsing dataset rows into typed observations, tolerating missing measurements
//! - Building an immutable date index once and swapping it atomically on reload
//! - Aggregating observations per field (mean, min, max, count) with absent values excluded
//! - Answering point, range, detail, summary and date-listing queries
//!
//! ```no_run
//! use std::sync::Arc;
//! use ocean_data_index::{DatasetIndex, IndexConfig, QueryService};
//!
//! # async fn example() -> ocean_data_index::Result<()> {
//! let config = IndexConfig::default().with_source("ocean_features.csv");
//! let service = QueryService::new(Arc::new(DatasetIndex::new(config)));
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2014, 7, 10).unwrap();
//! match service.point_query(date).await? {
//!     Some(average) => println!("{} rows, sst={:?}", average.data_count, average.sst_value),
//!     None => println!("no observations on {}", date),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod date_index;
        pub mod query_service;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    AggregateResult, DailyAverage, DailySummary, DateRange, FieldStats, Observation, OceanFeatures,
    RangeReport,
};
pub use app::services::date_index::{DateIndex, DatasetIndex, LoadStats};
pub use app::services::query_service::QueryService;
pub use config::{ColumnNames, IndexConfig};
pub use error::{LoadError, QueryError, RecordError};

/// Result type alias for the ocean data index
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for library consumers and the command-line front end
///
/// Each variant is a distinct signal so callers can map failures to statuses
/// without inspecting message text.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Loading the dataset failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A query was rejected
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Process exit status for this error
    ///
    /// Status 1 is reserved for "no data for the requested date".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Query(QueryError::InvalidRange { .. }) => 2,
            Self::Load(LoadError::SourceUnavailable { .. })
            | Self::Query(QueryError::Load(LoadError::SourceUnavailable { .. })) => 3,
            Self::Load(LoadError::EmptyDataset { .. })
            | Self::Query(QueryError::Load(LoadError::EmptyDataset { .. })) => 4,
            Self::Load(LoadError::Interrupted { .. })
            | Self::Query(QueryError::Load(LoadError::Interrupted { .. })) => 70,
            Self::Configuration { .. } => 64,
            Self::Io { .. } => 74,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_are_distinct_per_signal() {
        let date = NaiveDate::from_ymd_opt(2014, 7, 10).unwrap();
        let invalid = Error::from(QueryError::InvalidRange {
            start: date,
            end: date.pred_opt().unwrap(),
        });
        let unavailable = Error::from(LoadError::source_unavailable(
            PathBuf::from("/missing.csv"),
            "not found",
        ));
        let empty = Error::from(QueryError::Load(LoadError::EmptyDataset {
            path: PathBuf::from("/empty.csv"),
            records_read: 3,
            records_skipped: 3,
        }));

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(unavailable.exit_code(), 3);
        assert_eq!(empty.exit_code(), 4);
        assert_eq!(Error::configuration("bad").exit_code(), 64);

        let interrupted = Error::from(QueryError::Load(LoadError::Interrupted {
            reason: "loader panicked".to_string(),
        }));
        assert_eq!(interrupted.exit_code(), 70);
    }

    #[test]
    fn test_transparent_messages() {
        let error = Error::from(LoadError::source_unavailable(
            PathBuf::from("/missing.csv"),
            "not found",
        ));
        assert!(error.to_string().contains("/missing.csv"));
        assert!(error.to_string().contains("not found"));
    }
}
