//! Test utilities for the dataset record parser
//!
//! Shared fixtures used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Header row matching the comprehensive shark/ocean feature table
pub const FULL_HEADER: &str = "Individual_ID,Date,Longitude,Latitude,\
SST_Value,SST_Gradient,Thermal_Front_Strength,\
CHL_Value,CHL_Gradient,Productivity_Index,\
SSHA_Value,SSHA_Gradient,\
is_in_eddy,eddy_type,dist_to_eddy_center_km,Daily_Movement_km,Ocean_Complexity_Score,\
Bathymetry";

/// Helper to create dataset content with a realistic header
pub fn create_test_dataset_csv() -> String {
    [
        FULL_HEADER,
        "101,2014-07-10,-80.12,25.3,23.1,0.01,0.4,0.21,0.002,1.7,0.02,0.003,\
         True,cyclonic,15.2,41.5,0.62,-812",
        "102,2014-07-10,-80.40,25.1,23.3,0.02,0.5,,,,0.04,0.001,\
         False,,,12.0,0.48,-640",
        "101,2014-07-11,-80.15,25.4,NaN,0.01,,0.30,0.004,2.1,,,\
         maybe,nan,3.3,,,-901",
        "103,not-a-date,-80.00,25.0,22.9,0.03,0.2,0.10,0.001,0.9,0.01,0.002,\
         0,,7.1,8.0,0.31,-120",
    ]
    .join("\n")
}

/// Helper to create minimal dataset content with only the core columns
pub fn create_minimal_dataset_csv() -> String {
    "Date,SST_Value,CHL_Value,SSHA_Value\n2014-07-10,23.1,0.2,0.01".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
