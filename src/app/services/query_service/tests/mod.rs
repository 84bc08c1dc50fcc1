//! Shared fixtures for query service tests

use crate::app::models::Observation;
use crate::app::services::date_index::{DatasetIndex, DateIndex};
use crate::app::services::query_service::QueryService;
use crate::config::IndexConfig;
use chrono::NaiveDate;
use std::sync::Arc;

pub mod query_tests;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Observations for the July 2014 scenario
///
/// 2014-07-10 has sst values 23.0, 23.2 and 23.3 (one row with blank sst),
/// 2014-07-11 has a single row and 2014-07-09 has none.
pub fn scenario_observations() -> Vec<Observation> {
    vec![
        Observation::new(date(2014, 7, 10), Some(23.0), Some(0.2), Some(0.01)),
        Observation::new(date(2014, 7, 11), Some(24.1), None, Some(-0.02)),
        Observation::new(date(2014, 7, 10), Some(23.2), None, Some(0.03)),
        Observation::new(date(2014, 7, 10), None, Some(0.4), None),
        Observation::new(date(2014, 7, 10), Some(23.3), Some(0.3), None),
        Observation::new(date(2014, 7, 12), None, None, None),
    ]
}

pub fn scenario_index() -> DateIndex {
    DateIndex::from_observations("scenario", scenario_observations())
}

/// Query service over an already loaded in-memory snapshot
pub fn scenario_service() -> QueryService {
    let index = DatasetIndex::from_index(IndexConfig::default(), scenario_index());
    QueryService::new(Arc::new(index))
}
