//! Query service over the dataset index
//!
//! Public contract for point, range, detail, summary and date-listing queries.
//! Every operation takes the current snapshot once and computes against it, so
//! a reload running concurrently never mixes two dataset versions within one
//! answer.

use crate::app::models::{DailyAverage, DailySummary, DateRange, Observation, RangeReport};
use crate::app::services::date_index::{DatasetIndex, DateIndex, LoadStats};
use crate::error::{LoadError, QueryError};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

pub mod query;

#[cfg(test)]
pub mod tests;

/// Async query front end over a shared [`DatasetIndex`]
#[derive(Debug, Clone)]
pub struct QueryService {
    index: Arc<DatasetIndex>,
}

impl QueryService {
    /// Create a service over a shared dataset index
    pub fn new(index: Arc<DatasetIndex>) -> Self {
        Self { index }
    }

    /// Underlying dataset index
    pub fn index(&self) -> &Arc<DatasetIndex> {
        &self.index
    }

    async fn snapshot(&self) -> Result<Arc<DateIndex>, QueryError> {
        Ok(self.index.snapshot().await?)
    }

    /// Averaged measurements for a single date
    ///
    /// Returns `Ok(None)` when the date has no observations.
    pub async fn point_query(&self, date: NaiveDate) -> Result<Option<DailyAverage>, QueryError> {
        let snapshot = self.snapshot().await?;
        let result = snapshot.point(date);
        debug!("Point query {}: found={}", date, result.is_some());
        Ok(result)
    }

    /// Averaged measurements for every indexed date in `[start, end]`
    ///
    /// The range is validated before the dataset is touched.
    pub async fn range_query(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyAverage>, QueryError> {
        let range = DateRange::new(start, end)?;
        let snapshot = self.snapshot().await?;
        let data = snapshot.range(&range);
        debug!("Range query {}: {} dates", range.label(), data.len());
        Ok(data)
    }

    /// Range query wrapped with totals for presentation
    pub async fn range_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeReport, QueryError> {
        let range = DateRange::new(start, end)?;
        let snapshot = self.snapshot().await?;
        Ok(RangeReport::new(range, snapshot.range(&range)))
    }

    /// Raw observations for a date in source order
    pub async fn detail_query(
        &self,
        date: NaiveDate,
    ) -> Result<Option<Vec<Observation>>, QueryError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.detail(date))
    }

    /// Mean, min, max and count per field for a date
    pub async fn summary_query(&self, date: NaiveDate) -> Result<Option<DailySummary>, QueryError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.summary(date))
    }

    /// Every date with observations, ascending and distinct
    pub async fn list_dates(&self) -> Result<Vec<NaiveDate>, QueryError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.dates())
    }

    /// Earliest and latest indexed dates
    pub async fn date_span(&self) -> Result<Option<(NaiveDate, NaiveDate)>, QueryError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.date_span())
    }

    /// Statistics of the load behind the current snapshot
    pub async fn load_stats(&self) -> Result<LoadStats, QueryError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.load_stats().clone())
    }

    /// Rebuild the index from the source and swap it in
    ///
    /// On failure the previous snapshot keeps answering queries.
    pub async fn reload(&self) -> Result<LoadStats, LoadError> {
        let stats = self.index.reload().await?;
        info!("Reload complete: {}", stats.summary());
        Ok(stats)
    }
}
