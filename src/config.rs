//! Configuration management and validation.
//!
//! Provides the dataset location, source column names and load options used to
//! build the date index. Values come from defaults, then environment overrides,
//! then command-line arguments.

use crate::constants::{self, columns, env};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Names of the source columns read by the record parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    /// Observation date column (required in every row)
    pub date: String,

    /// Sea-surface temperature column
    pub sst: String,

    /// Chlorophyll concentration column
    pub chl: String,

    /// Sea-surface-height anomaly column
    pub ssha: String,

    /// Longitude column (detail listings only)
    pub longitude: String,

    /// Latitude column (detail listings only)
    pub latitude: String,

    /// Tracked individual identifier column (detail listings only)
    pub individual_id: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: columns::DATE.to_string(),
            sst: columns::SST.to_string(),
            chl: columns::CHL.to_string(),
            ssha: columns::SSHA.to_string(),
            longitude: columns::LONGITUDE.to_string(),
            latitude: columns::LATITUDE.to_string(),
            individual_id: columns::INDIVIDUAL_ID.to_string(),
        }
    }
}

impl ColumnNames {
    fn named(&self) -> [(&'static str, &str); 7] {
        [
            ("date", self.date.as_str()),
            ("sst", self.sst.as_str()),
            ("chl", self.chl.as_str()),
            ("ssha", self.ssha.as_str()),
            ("longitude", self.longitude.as_str()),
            ("latitude", self.latitude.as_str()),
            ("individual_id", self.individual_id.as_str()),
        ]
    }
}

/// Configuration for loading the dataset into the date index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Path to a CSV file, or a directory searched recursively for CSV files
    pub source: PathBuf,

    /// File name pattern used when `source` is a directory
    pub file_pattern: String,

    /// Source column names
    pub columns: ColumnNames,

    /// Display a progress bar while reading source files
    pub show_progress: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(constants::DEFAULT_DATASET_PATH),
            file_pattern: constants::DEFAULT_FILE_PATTERN.to_string(),
            columns: ColumnNames::default(),
            show_progress: false,
        }
    }
}

impl IndexConfig {
    /// Create configuration with a custom dataset source
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Create configuration with a custom file pattern for directory sources
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Create configuration with custom column names
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Create configuration with progress reporting enabled
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// clear a default.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = get(env::DATA_PATH) {
            debug!("{} overrides dataset source: {}", env::DATA_PATH, path);
            self.source = PathBuf::from(path);
        }
        if let Some(pattern) = get(env::FILE_PATTERN) {
            self.file_pattern = pattern;
        }
        if let Some(column) = get(env::DATE_COLUMN) {
            self.columns.date = column;
        }
        if let Some(column) = get(env::SST_COLUMN) {
            self.columns.sst = column;
        }
        if let Some(column) = get(env::CHL_COLUMN) {
            self.columns.chl = column;
        }
        if let Some(column) = get(env::SSHA_COLUMN) {
            self.columns.ssha = column;
        }
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::configuration("Dataset source path cannot be empty"));
        }

        for (role, name) in self.columns.named() {
            if name.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Column name for '{}' cannot be empty",
                    role
                )));
            }
        }

        glob::Pattern::new(&self.file_pattern).map_err(|e| {
            Error::configuration(format!(
                "Invalid file pattern '{}': {}",
                self.file_pattern, e
            ))
        })?;

        Ok(())
    }
}
