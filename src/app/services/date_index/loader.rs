//! Dataset loading and source file discovery
//!
//! This module reads the configured source (one CSV file, or every matching
//! file under a directory), parses each row and buckets the observations by
//! date.

use super::DateIndex;
use super::metadata::LoadStats;
use crate::app::models::Observation;
use crate::app::services::record_parser::CsvRecordParser;
use crate::config::IndexConfig;
use crate::error::LoadError;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

impl DateIndex {
    /// Load the configured dataset and build a date index
    ///
    /// Files are read in sorted path order and rows keep their source order
    /// within each date bucket. Rows that fail to parse are skipped and
    /// counted in the returned index's [`LoadStats`].
    ///
    /// # Errors
    /// * `LoadError::SourceUnavailable` if the source path does not exist or a
    ///   file cannot be opened
    /// * `LoadError::EmptyDataset` if no row produced an observation
    pub fn load(config: &IndexConfig) -> Result<Self, LoadError> {
        info!("Loading dataset from: {}", config.source.display());

        let start_time = Instant::now();
        let files = discover_source_files(&config.source, &config.file_pattern)?;
        info!("Found {} source files to process", files.len());

        let progress_bar = if config.show_progress && files.len() > 1 {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb.set_message("Loading dataset files...");
            Some(pb)
        } else {
            None
        };

        let parser = CsvRecordParser::new(config.columns.clone());
        let mut by_date: BTreeMap<NaiveDate, Vec<Observation>> = BTreeMap::new();
        let mut stats = LoadStats::new();

        for (file_index, file_path) in files.iter().enumerate() {
            if let Some(pb) = &progress_bar {
                pb.set_position(file_index as u64);
                pb.set_message(format!(
                    "Processing {}",
                    file_path.file_name().unwrap_or_default().to_string_lossy()
                ));
            }

            let result = parser.parse_file(file_path)?;
            stats.add_file(&result.stats);

            for observation in result.observations {
                by_date.entry(observation.date).or_default().push(observation);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Dataset loading complete");
        }

        if stats.observations_indexed == 0 {
            warn!(
                "No usable observations in {} ({} records read)",
                config.source.display(),
                stats.total_records
            );
            return Err(LoadError::EmptyDataset {
                path: config.source.clone(),
                records_read: stats.total_records,
                records_skipped: stats.records_skipped,
            });
        }

        stats.distinct_dates = by_date.len();
        stats.load_duration = start_time.elapsed();

        if stats.has_skipped() {
            warn!(
                "Skipped {} of {} records while loading {}",
                stats.records_skipped,
                stats.total_records,
                config.source.display()
            );
        }
        info!("{}", stats.summary());

        Ok(Self {
            by_date,
            source: config.source.clone(),
            stats,
        })
    }
}

/// Resolve the dataset source into the list of files to read
///
/// A file source is returned as-is. A directory is walked recursively and
/// every file whose name matches `pattern` is returned in sorted path order.
pub fn discover_source_files(source: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    if !source.exists() {
        return Err(LoadError::source_unavailable(source, "path does not exist"));
    }

    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }

    let matcher = glob::Pattern::new(pattern).map_err(|e| {
        LoadError::source_unavailable(source, format!("invalid file pattern '{}': {}", pattern, e))
    })?;

    let mut files: Vec<PathBuf> = WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", source.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| matcher.matches(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!(
        "Discovered {} files matching '{}' under {}",
        files.len(),
        pattern,
        source.display()
    );

    Ok(files)
}
