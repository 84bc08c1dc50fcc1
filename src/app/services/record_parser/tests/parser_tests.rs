//! Tests for the CSV record parser

use super::*;
use crate::app::models::Observation;
use crate::app::services::aggregator::aggregate;
use crate::app::services::record_parser::{
    ColumnMapping, CsvRecordParser, parse_observation_record,
};
use crate::config::ColumnNames;
use crate::error::LoadError;
use chrono::NaiveDate;
use csv::StringRecord;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse_str(content: &str) -> crate::app::services::record_parser::ParseResult {
    CsvRecordParser::new(ColumnNames::default())
        .parse_reader(content.as_bytes(), Path::new("test.csv"))
        .unwrap()
}

#[test]
fn test_parse_full_dataset() {
    let result = parse_str(&create_test_dataset_csv());

    assert_eq!(result.stats.total_records, 4);
    assert_eq!(result.stats.observations_parsed, 3);
    assert_eq!(result.stats.records_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);

    let first = &result.observations[0];
    assert_eq!(first.date, date(2014, 7, 10));
    assert_eq!(first.sst, Some(23.1));
    assert_eq!(first.chl, Some(0.21));
    assert_eq!(first.ssha, Some(0.02));
    assert_eq!(first.longitude, Some(-80.12));
    assert_eq!(first.latitude, Some(25.3));
    assert_eq!(first.individual_id, Some(101));

    // Blank chl is absent, sst is kept
    let second = &result.observations[1];
    assert_eq!(second.sst, Some(23.3));
    assert_eq!(second.chl, None);

    // Non-finite sst and blank ssha are absent independently
    let third = &result.observations[2];
    assert_eq!(third.date, date(2014, 7, 11));
    assert_eq!(third.sst, None);
    assert_eq!(third.chl, Some(0.30));
    assert_eq!(third.ssha, None);
}

#[test]
fn test_parse_context_columns() {
    let result = parse_str(&create_test_dataset_csv());

    let first = &result.observations[0].features;
    assert_eq!(first.sst_gradient, Some(0.01));
    assert_eq!(first.thermal_front_strength, Some(0.4));
    assert_eq!(first.chl_gradient, Some(0.002));
    assert_eq!(first.productivity_index, Some(1.7));
    assert_eq!(first.ssha_gradient, Some(0.003));
    assert_eq!(first.is_in_eddy, Some(true));
    assert_eq!(first.eddy_type.as_deref(), Some("cyclonic"));
    assert_eq!(first.dist_to_eddy_center_km, Some(15.2));
    assert_eq!(first.daily_movement_km, Some(41.5));
    assert_eq!(first.ocean_complexity_score, Some(0.62));

    // Blank context cells are absent without affecting the measurements
    let second = &result.observations[1];
    assert_eq!(second.features.is_in_eddy, Some(false));
    assert_eq!(second.features.eddy_type, None);
    assert_eq!(second.features.chl_gradient, None);
    assert_eq!(second.features.dist_to_eddy_center_km, None);
    assert_eq!(second.sst, Some(23.3));

    // An unrecognised flag and a "nan" label are absent
    let third = &result.observations[2].features;
    assert_eq!(third.is_in_eddy, None);
    assert_eq!(third.eddy_type, None);
    assert_eq!(third.thermal_front_strength, None);
    assert_eq!(third.dist_to_eddy_center_km, Some(3.3));
}

#[test]
fn test_context_columns_do_not_change_aggregates() {
    let with_context = parse_str(&create_test_dataset_csv());
    let plain = parse_str(
        "Date,SST_Value,CHL_Value,SSHA_Value\n\
         2014-07-10,23.1,0.21,0.02\n\
         2014-07-10,23.3,,0.04\n",
    );

    let day = |observations: &[Observation]| {
        aggregate(
            &observations
                .iter()
                .filter(|o| o.date == date(2014, 7, 10))
                .cloned()
                .collect::<Vec<_>>(),
        )
    };
    assert_eq!(day(&with_context.observations), day(&plain.observations));
}

#[test]
fn test_parse_minimal_dataset() {
    let result = parse_str(&create_minimal_dataset_csv());

    assert_eq!(result.stats.observations_parsed, 1);
    let obs = &result.observations[0];
    assert_eq!(obs.longitude, None);
    assert_eq!(obs.individual_id, None);
    assert!(obs.sst.is_some());
}

#[test]
fn test_parse_row_with_all_measurements_blank_is_kept() {
    let result = parse_str("Date,SST_Value,CHL_Value,SSHA_Value\n2014-07-10,,,\n");

    assert_eq!(result.stats.observations_parsed, 1);
    let obs = &result.observations[0];
    assert_eq!((obs.sst, obs.chl, obs.ssha), (None, None, None));
}

#[test]
fn test_parse_missing_date_column_skips_everything() {
    let result = parse_str("When,SST_Value\n2014-07-10,23.1\n2014-07-11,23.2\n");

    assert_eq!(result.stats.total_records, 2);
    assert_eq!(result.stats.observations_parsed, 0);
    assert_eq!(result.stats.records_skipped, 2);
    assert!(result.observations.is_empty());
}

#[test]
fn test_parse_short_rows_are_flexible() {
    let result = parse_str("Date,SST_Value,CHL_Value,SSHA_Value\n2014-07-10,23.1\n");

    assert_eq!(result.stats.observations_parsed, 1);
    let obs = &result.observations[0];
    assert_eq!(obs.sst, Some(23.1));
    assert_eq!(obs.chl, None);
    assert_eq!(obs.ssha, None);
}

#[test]
fn test_parse_datetime_dates_collapse_to_day() {
    let result = parse_str(
        "Date,SST_Value\n2014-07-10 01:00:00,23.0\n2014-07-10T22:30:00,23.4\n",
    );

    assert_eq!(result.observations.len(), 2);
    assert!(result.observations.iter().all(|o| o.date == date(2014, 7, 10)));
}

#[test]
fn test_parse_custom_column_names() {
    let columns = ColumnNames {
        date: "day".to_string(),
        sst: "temp".to_string(),
        ..Default::default()
    };
    let result = CsvRecordParser::new(columns)
        .parse_reader("day,temp\n2020-01-02,18.5\n".as_bytes(), Path::new("custom.csv"))
        .unwrap();

    assert_eq!(result.observations[0].date, date(2020, 1, 2));
    assert_eq!(result.observations[0].sst, Some(18.5));
}

#[test]
fn test_parse_file_from_disk() {
    let temp_file = create_temp_file(&create_test_dataset_csv());
    let parser = CsvRecordParser::new(ColumnNames::default());

    let result = parser.parse_file(temp_file.path()).unwrap();
    assert_eq!(result.stats.observations_parsed, 3);
}

#[test]
fn test_parse_missing_file() {
    let parser = CsvRecordParser::new(ColumnNames::default());
    let err = parser
        .parse_file(Path::new("/definitely/not/here/data.csv"))
        .unwrap_err();

    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
}

#[test]
fn test_parse_observation_record_directly() {
    let headers = StringRecord::from(vec!["Date", "SST_Value", "CHL_Value", "SSHA_Value"]);
    let mapping = ColumnMapping::analyze(&headers, &ColumnNames::default());

    let record = StringRecord::from(vec!["2014-07-10", "23.1", "bad", "0.02"]);
    let obs = parse_observation_record(&record, &mapping).unwrap();
    assert_eq!(obs.sst, Some(23.1));
    assert_eq!(obs.chl, None);
    assert_eq!(obs.ssha, Some(0.02));
    assert_eq!(obs.features, Default::default());

    let record = StringRecord::from(vec!["", "23.1", "0.2", "0.02"]);
    assert!(parse_observation_record(&record, &mapping).is_err());
}
