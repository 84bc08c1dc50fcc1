//! Per-field aggregation of observations
//!
//! Computes mean, min, max and count for each measurement field over a set of
//! observations. Absent values are excluded per field, so a field with no
//! present values reports `None` rather than zero.
//!
//! Present values are sorted before summing, which makes the result
//! independent of the order observations were loaded in.

use crate::app::models::{AggregateResult, FieldStats, Measurement, Observation};
use crate::constants::OUTPUT_DECIMAL_DIGITS;

/// Aggregate all measurement fields over a non-empty set of observations
///
/// `total_count` is the number of observations passed in, including those
/// where every field is absent. Callers only aggregate dates that exist in the
/// index, so an empty slice is a logic error; release builds return all fields
/// absent with a zero total.
pub fn aggregate(observations: &[Observation]) -> AggregateResult {
    debug_assert!(
        !observations.is_empty(),
        "aggregate called with no observations"
    );

    AggregateResult {
        sst: aggregate_field(observations, Measurement::Sst),
        chl: aggregate_field(observations, Measurement::Chl),
        ssha: aggregate_field(observations, Measurement::Ssha),
        total_count: observations.len(),
    }
}

/// Aggregate a single measurement field
pub fn aggregate_field(observations: &[Observation], measurement: Measurement) -> FieldStats {
    let mut values: Vec<f64> = observations
        .iter()
        .filter_map(|obs| obs.value(measurement))
        .collect();

    if values.is_empty() {
        return FieldStats::absent();
    }

    values.sort_by(f64::total_cmp);

    let count = values.len();
    let min = values[0];
    let max = values[count - 1];

    FieldStats {
        mean: Some(round_output(mean(&values))),
        min: Some(round_output(min)),
        max: Some(round_output(max)),
        count,
    }
}

/// Mean of finite, sorted values
///
/// Values near `f64::MAX` overflow a plain sum, so those fall back to summing
/// pre-divided terms, which stays within the range of the inputs.
fn mean(sorted: &[f64]) -> f64 {
    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        sorted.iter().map(|v| v / n).sum()
    }
}

/// Round to the output precision, halves away from zero
///
/// Magnitudes too large to scale are returned as is; they carry no fractional
/// digits to round.
pub fn round_output(value: f64) -> f64 {
    let scale = 10f64.powi(OUTPUT_DECIMAL_DIGITS);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}
