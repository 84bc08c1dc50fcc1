//! Core CSV parser implementation
//!
//! This module handles file reading, header analysis and the record loop that
//! feeds individual rows through [`parse_observation_record`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::column_mapping::{ColumnMapping, FeatureColumns};
use super::field_parsers::{
    parse_optional_bool, parse_optional_f64, parse_optional_i64, parse_optional_text,
    parse_required_date,
};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Observation, OceanFeatures};
use crate::config::ColumnNames;
use crate::error::{LoadError, RecordError};

/// Parse a single observation from a CSV record
///
/// The row is rejected only when its date is missing or malformed; each
/// measurement is converted independently and marked absent on failure.
pub fn parse_observation_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> Result<Observation, RecordError> {
    let date = parse_required_date(record, mapping.date, &mapping.date_column)?;

    let sst = parse_optional_f64(record, mapping.sst, "sst");
    let chl = parse_optional_f64(record, mapping.chl, "chl");
    let ssha = parse_optional_f64(record, mapping.ssha, "ssha");

    let longitude = parse_optional_f64(record, mapping.longitude, "longitude");
    let latitude = parse_optional_f64(record, mapping.latitude, "latitude");
    let individual_id = parse_optional_i64(record, mapping.individual_id);

    Ok(Observation::new(date, sst, chl, ssha)
        .with_location(longitude, latitude)
        .with_individual_id(individual_id)
        .with_features(parse_features(record, &mapping.features)))
}

/// Read the context columns of a row; each one is independently optional
fn parse_features(record: &StringRecord, columns: &FeatureColumns) -> OceanFeatures {
    let float = |index: Option<usize>, name: &str| parse_optional_f64(record, index, name);

    OceanFeatures {
        sst_gradient: float(columns.sst_gradient, "sst_gradient"),
        thermal_front_strength: float(columns.thermal_front_strength, "thermal_front_strength"),
        chl_gradient: float(columns.chl_gradient, "chl_gradient"),
        productivity_index: float(columns.productivity_index, "productivity_index"),
        ssha_gradient: float(columns.ssha_gradient, "ssha_gradient"),
        is_in_eddy: parse_optional_bool(record, columns.is_in_eddy, "is_in_eddy"),
        eddy_type: parse_optional_text(record, columns.eddy_type),
        dist_to_eddy_center_km: float(columns.dist_to_eddy_center_km, "dist_to_eddy_center_km"),
        daily_movement_km: float(columns.daily_movement_km, "daily_movement_km"),
        ocean_complexity_score: float(columns.ocean_complexity_score, "ocean_complexity_score"),
    }
}

/// CSV parser producing observations for the date index
#[derive(Debug, Clone)]
pub struct CsvRecordParser {
    columns: ColumnNames,
}

impl CsvRecordParser {
    /// Create a new parser for the given column names
    pub fn new(columns: ColumnNames) -> Self {
        Self { columns }
    }

    /// Parse a CSV file and return observations with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult, LoadError> {
        info!("Parsing dataset file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            LoadError::source_unavailable(file_path, format!("failed to open file: {}", e))
        })?;

        self.parse_reader(file, file_path)
    }

    /// Parse CSV content from any reader
    ///
    /// `origin` is only used for diagnostics and error reporting.
    pub fn parse_reader<R: Read>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<ParseResult, LoadError> {
        let mut stats = ParseStats::new();
        let mut observations = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            LoadError::source_unavailable(origin, format!("failed to read CSV headers: {}", e))
        })?;

        let mapping = ColumnMapping::analyze(headers, &self.columns);
        if mapping.date.is_none() {
            warn!(
                "Date column '{}' not found in {}; every row will be skipped",
                self.columns.date,
                origin.display()
            );
        }
        let missing = mapping.missing_measurements();
        if !missing.is_empty() {
            warn!(
                "Measurement columns absent from {}: {:?}",
                origin.display(),
                missing
            );
        }
        debug!(
            "Column mapping for {}: {} columns",
            origin.display(),
            mapping.name_to_index.len()
        );

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => match parse_observation_record(&record, &mapping) {
                    Ok(observation) => {
                        observations.push(observation);
                        stats.observations_parsed += 1;
                    }
                    Err(e) => {
                        debug!("Skipped record {}: {}", stats.total_records, e);
                        stats.record_skip(e.to_string());
                    }
                },
                Err(e) => {
                    let line = e.position().map_or(0, |position| position.line());
                    let error = RecordError::MalformedRecord {
                        line,
                        reason: e.to_string(),
                    };
                    debug!("Skipped record {}: {}", stats.total_records, error);
                    stats.record_skip(error.to_string());
                }
            }
        }

        info!(
            "Parsed {} of {} records in {} ({:.1}% kept, {} skipped)",
            stats.observations_parsed,
            stats.total_records,
            origin.display(),
            stats.success_rate(),
            stats.records_skipped
        );

        Ok(ParseResult {
            observations,
            stats,
        })
    }
}
