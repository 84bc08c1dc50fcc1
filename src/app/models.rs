//! Data models for ocean observation queries
//!
//! This module contains the core data structures for representing parsed
//! observations and the result records returned by the query service.

use crate::error::QueryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Observation Structure
// =============================================================================

/// One parsed dataset row
///
/// Each measurement is independently optional: `None` means the source value
/// was missing, blank or unusable, which is distinct from a measured zero.
/// An observation with every measurement absent is still valid and counts
/// toward the number of observations recorded on its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,

    /// Sea-surface temperature
    pub sst: Option<f64>,

    /// Chlorophyll concentration
    pub chl: Option<f64>,

    /// Sea-surface-height anomaly
    pub ssha: Option<f64>,

    /// Longitude of the observation (decimal degrees)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub longitude: Option<f64>,

    /// Latitude of the observation (decimal degrees)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub latitude: Option<f64>,

    /// Identifier of the tracked individual associated with the row
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub individual_id: Option<i64>,

    /// Derived oceanographic columns, listed in detail output but never aggregated
    #[serde(flatten)]
    pub features: OceanFeatures,
}

impl Observation {
    /// Create an observation with measurements only
    pub fn new(date: NaiveDate, sst: Option<f64>, chl: Option<f64>, ssha: Option<f64>) -> Self {
        Self {
            date,
            sst,
            chl,
            ssha,
            longitude: None,
            latitude: None,
            individual_id: None,
            features: OceanFeatures::default(),
        }
    }

    /// Attach a position
    pub fn with_location(mut self, longitude: Option<f64>, latitude: Option<f64>) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Attach a tracked individual identifier
    pub fn with_individual_id(mut self, individual_id: Option<i64>) -> Self {
        self.individual_id = individual_id;
        self
    }

    /// Attach derived oceanographic context
    pub fn with_features(mut self, features: OceanFeatures) -> Self {
        self.features = features;
        self
    }

    /// Value of one measurement field
    pub fn value(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Sst => self.sst,
            Measurement::Chl => self.chl,
            Measurement::Ssha => self.ssha,
        }
    }
}

/// Optional per-row context columns from the source dataset
///
/// Each value is carried through to detail listings as read. A blank or
/// unparsable cell is `None` and is omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OceanFeatures {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sst_gradient: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thermal_front_strength: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chl_gradient: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub productivity_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ssha_gradient: Option<f64>,

    /// Whether the position lies inside a detected eddy
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_in_eddy: Option<bool>,

    /// Eddy classification label as written in the source
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub eddy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dist_to_eddy_center_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub daily_movement_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ocean_complexity_score: Option<f64>,
}

impl OceanFeatures {
    /// Numeric context values paired with their output names
    pub fn numeric_values(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("sst_gradient", self.sst_gradient),
            ("thermal_front_strength", self.thermal_front_strength),
            ("chl_gradient", self.chl_gradient),
            ("productivity_index", self.productivity_index),
            ("ssha_gradient", self.ssha_gradient),
            ("dist_to_eddy_center_km", self.dist_to_eddy_center_km),
            ("daily_movement_km", self.daily_movement_km),
            ("ocean_complexity_score", self.ocean_complexity_score),
        ]
    }
}

/// Measurement fields carried by every observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    Sst,
    Chl,
    Ssha,
}

impl Measurement {
    /// All measurement fields in output order
    pub const ALL: [Measurement; 3] = [Measurement::Sst, Measurement::Chl, Measurement::Ssha];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Measurement::Sst => "sst",
            Measurement::Chl => "chl",
            Measurement::Ssha => "ssha",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Aggregation Results
// =============================================================================

/// Statistics for one measurement field over a set of observations
///
/// When `count` is zero the mean, min and max are all `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStats {
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,

    /// Number of observations where the field was present
    pub count: usize,
}

impl FieldStats {
    /// Statistics for a field with no present values
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Per-field statistics plus the number of observations considered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub sst: FieldStats,
    pub chl: FieldStats,
    pub ssha: FieldStats,

    /// Number of observations considered, including those with absent fields
    pub total_count: usize,
}

impl AggregateResult {
    /// Statistics for one measurement field
    pub fn field(&self, measurement: Measurement) -> &FieldStats {
        match measurement {
            Measurement::Sst => &self.sst,
            Measurement::Chl => &self.chl,
            Measurement::Ssha => &self.ssha,
        }
    }
}

// =============================================================================
// Query Results
// =============================================================================

/// Averaged measurements for one date (point and range queries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub sst_value: Option<f64>,
    pub chl_value: Option<f64>,
    pub ssha_value: Option<f64>,

    /// Number of observations recorded on the date
    pub data_count: usize,
}

impl DailyAverage {
    /// Build from the aggregate of a date's observations
    pub fn from_aggregate(date: NaiveDate, aggregate: &AggregateResult) -> Self {
        Self {
            date,
            sst_value: aggregate.sst.mean,
            chl_value: aggregate.chl.mean,
            ssha_value: aggregate.ssha.mean,
            data_count: aggregate.total_count,
        }
    }
}

/// Full statistics for one date (summary queries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,

    #[serde(flatten)]
    pub stats: AggregateResult,
}

/// Validated inclusive date interval
///
/// Deserialization goes through [`DateRange::new`], so an inverted interval
/// is rejected there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = QueryError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, QueryError> {
        if start > end {
            return Err(QueryError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Human-readable label, e.g. "2014-07-09 to 2014-07-11"
    pub fn label(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }
}

/// Range query output with totals for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_range: String,

    /// Sum of `data_count` over every returned date
    pub total_records: usize,

    pub data: Vec<DailyAverage>,
}

impl RangeReport {
    pub fn new(range: DateRange, data: Vec<DailyAverage>) -> Self {
        Self {
            start_date: range.start(),
            end_date: range.end(),
            date_range: range.label(),
            total_records: data.iter().map(|day| day.data_count).sum(),
            data,
        }
    }
}
