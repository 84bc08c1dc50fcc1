//! Tests for synchronous queries on a snapshot

use super::*;
use crate::app::models::DateRange;

#[test]
fn test_point_scenario() {
    let index = scenario_index();
    let average = index.point(date(2014, 7, 10)).unwrap();

    assert_eq!(average.date, date(2014, 7, 10));
    assert_eq!(average.sst_value, Some(23.166667));
    assert_eq!(average.chl_value, Some(0.3));
    assert_eq!(average.ssha_value, Some(0.02));
    assert_eq!(average.data_count, 4);
}

#[test]
fn test_point_not_found() {
    let index = scenario_index();

    assert!(index.point(date(2014, 7, 9)).is_none());
    assert!(index.detail(date(2014, 7, 9)).is_none());
    assert!(index.summary(date(2014, 7, 9)).is_none());
}

#[test]
fn test_point_all_fields_absent() {
    let index = scenario_index();
    let average = index.point(date(2014, 7, 12)).unwrap();

    assert_eq!(average.data_count, 1);
    assert_eq!(average.sst_value, None);
    assert_eq!(average.chl_value, None);
    assert_eq!(average.ssha_value, None);
}

#[test]
fn test_range_omits_missing_dates() {
    let index = scenario_index();
    let range = DateRange::new(date(2014, 7, 9), date(2014, 7, 11)).unwrap();
    let data = index.range(&range);

    let dates: Vec<_> = data.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2014, 7, 10), date(2014, 7, 11)]);
    assert_eq!(data[1].sst_value, Some(24.1));
    assert_eq!(data[1].chl_value, None);
}

#[test]
fn test_range_single_day_matches_point() {
    let index = scenario_index();
    let day = date(2014, 7, 10);
    let range = DateRange::new(day, day).unwrap();

    assert_eq!(index.range(&range), vec![index.point(day).unwrap()]);
}

#[test]
fn test_range_outside_data_is_empty() {
    let index = scenario_index();
    let range = DateRange::new(date(2020, 1, 1), date(2020, 12, 31)).unwrap();

    assert!(index.range(&range).is_empty());
}

#[test]
fn test_detail_preserves_source_order() {
    let index = scenario_index();
    let rows = index.detail(date(2014, 7, 10)).unwrap();

    let sst: Vec<_> = rows.iter().map(|obs| obs.sst).collect();
    assert_eq!(sst, vec![Some(23.0), Some(23.2), None, Some(23.3)]);
}

#[test]
fn test_summary_statistics() {
    let index = scenario_index();
    let summary = index.summary(date(2014, 7, 10)).unwrap();

    assert_eq!(summary.stats.total_count, 4);
    assert_eq!(summary.stats.sst.count, 3);
    assert_eq!(summary.stats.sst.min, Some(23.0));
    assert_eq!(summary.stats.sst.max, Some(23.3));
    assert_eq!(summary.stats.sst.mean, Some(23.166667));
    assert_eq!(summary.stats.ssha.count, 2);
}

#[test]
fn test_summary_mean_matches_point() {
    let index = scenario_index();
    for day in index.dates() {
        let point = index.point(day).unwrap();
        let summary = index.summary(day).unwrap();
        assert_eq!(point.sst_value, summary.stats.sst.mean);
        assert_eq!(point.chl_value, summary.stats.chl.mean);
        assert_eq!(point.ssha_value, summary.stats.ssha.mean);
        assert_eq!(point.data_count, summary.stats.total_count);
    }
}
