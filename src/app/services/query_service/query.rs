//! Synchronous query operations on a date index snapshot
//!
//! These are the building blocks used by the async
//! [`QueryService`](super::QueryService); callers already holding a snapshot can
//! use them directly.

use crate::app::models::{DailyAverage, DailySummary, DateRange, Observation};
use crate::app::services::aggregator::aggregate;
use crate::app::services::date_index::DateIndex;
use chrono::NaiveDate;

impl DateIndex {
    /// Averaged measurements for a date, `None` when the date has no data
    pub fn point(&self, date: NaiveDate) -> Option<DailyAverage> {
        self.get(date)
            .map(|observations| DailyAverage::from_aggregate(date, &aggregate(observations)))
    }

    /// Averaged measurements for every indexed date in the range, ascending
    ///
    /// Dates without observations are omitted rather than zero-filled.
    pub fn range(&self, range: &DateRange) -> Vec<DailyAverage> {
        self.by_date
            .range(range.start()..=range.end())
            .map(|(&date, observations)| {
                DailyAverage::from_aggregate(date, &aggregate(observations))
            })
            .collect()
    }

    /// Raw observations for a date in source order
    pub fn detail(&self, date: NaiveDate) -> Option<Vec<Observation>> {
        self.get(date).map(<[Observation]>::to_vec)
    }

    /// Full per-field statistics for a date
    pub fn summary(&self, date: NaiveDate) -> Option<DailySummary> {
        self.get(date).map(|observations| DailySummary {
            date,
            stats: aggregate(observations),
        })
    }
}
