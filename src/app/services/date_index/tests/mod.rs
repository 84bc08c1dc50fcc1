//! Shared test utilities and fixtures for date index tests

use crate::config::IndexConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Dataset covering 2014-07-10 (three rows, one blank sst) and 2014-07-11
pub const SAMPLE_DATASET: &str = "\
Individual_ID,Date,Longitude,Latitude,SST_Value,CHL_Value,SSHA_Value
101,2014-07-10,-80.1,25.3,23.0,0.20,0.01
102,2014-07-10,-80.4,25.1,23.2,,0.03
103,2014-07-11,-79.9,25.6,24.1,0.15,
101,2014-07-10,-80.2,25.2,23.3,0.40,
104,bad-date,-80.0,25.0,22.0,0.10,0.02
";

/// Write a CSV file into a directory and return its path
pub fn write_csv(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Temporary directory holding the sample dataset plus its config
pub fn sample_source() -> (TempDir, IndexConfig) {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "ocean.csv", SAMPLE_DATASET);
    (dir, IndexConfig::default().with_source(path))
}
