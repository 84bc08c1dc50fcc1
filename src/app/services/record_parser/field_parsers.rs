//! Field parsing utilities for dataset records
//!
//! This module provides helper functions for parsing dates and optional
//! numeric values from CSV records.

use crate::constants::{DATE_FORMATS, DATETIME_FORMATS, FALSE_VALUES, TRUE_VALUES};
use crate::error::RecordError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use tracing::debug;

/// Parse a calendar date, discarding any time-of-day component
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, ISO date-times with a space or `T`
/// separator and RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Parse the required date field from a CSV record
pub fn parse_required_date(
    record: &StringRecord,
    index: Option<usize>,
    column: &str,
) -> Result<NaiveDate, RecordError> {
    get_optional_field(record, index)
        .and_then(parse_date)
        .ok_or_else(|| RecordError::MissingDate {
            line: record_line(record),
            column: column.to_string(),
        })
}

/// Parse an optional measurement from a CSV record
///
/// Missing, blank, non-numeric and non-finite values are all absent.
pub fn parse_optional_f64(
    record: &StringRecord,
    index: Option<usize>,
    column: &str,
) -> Option<f64> {
    let value = get_optional_field(record, index)?;

    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        Ok(parsed) => {
            debug!("Non-finite value for '{}': {}", column, parsed);
            None
        }
        Err(_) => {
            debug!("Failed to parse '{}' = '{}' as float", column, value);
            None
        }
    }
}

/// Parse an optional integer identifier from a CSV record
///
/// Whole-number floats such as `12.0` are accepted, as produced by tools that
/// store integer columns with missing values as floating point.
pub fn parse_optional_i64(record: &StringRecord, index: Option<usize>) -> Option<i64> {
    let value = get_optional_field(record, index)?;

    value.parse::<i64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Parse an optional flag from a CSV record
///
/// Accepts the spellings in [`TRUE_VALUES`] and [`FALSE_VALUES`] in any case,
/// plus numbers, where any finite non-zero value is true.
pub fn parse_optional_bool(
    record: &StringRecord,
    index: Option<usize>,
    column: &str,
) -> Option<bool> {
    let value = get_optional_field(record, index)?;
    let matches = |spellings: &[&str]| spellings.iter().any(|s| value.eq_ignore_ascii_case(s));

    if matches(TRUE_VALUES) {
        return Some(true);
    }
    if matches(FALSE_VALUES) {
        return Some(false);
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed != 0.0),
        _ => {
            debug!("Failed to parse '{}' = '{}' as flag", column, value);
            None
        }
    }
}

/// Parse an optional free-text label from a CSV record
pub fn parse_optional_text(record: &StringRecord, index: Option<usize>) -> Option<String> {
    get_optional_field(record, index)
        .filter(|value| !value.eq_ignore_ascii_case("nan"))
        .map(str::to_string)
}

/// Get an optional field value from a CSV record
pub fn get_optional_field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|index| record.get(index))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Source line of a record, 0 when unknown
pub fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
