//! Application constants for the ocean data index
//!
//! This module contains default column names, accepted date formats, rounding
//! precision and environment variable names used throughout the crate.

// =============================================================================
// Dataset Source Defaults
// =============================================================================

/// Default dataset file, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str =
    "comprehensive_shark_ocean_features - comprehensive_shark_ocean_features.csv";

/// File name pattern used when the dataset source is a directory
pub const DEFAULT_FILE_PATTERN: &str = "*.csv";

// =============================================================================
// Column Names
// =============================================================================

/// Default column names in the source table
pub mod columns {
    pub const DATE: &str = "Date";
    pub const SST: &str = "SST_Value";
    pub const CHL: &str = "CHL_Value";
    pub const SSHA: &str = "SSHA_Value";
    pub const LONGITUDE: &str = "Longitude";
    pub const LATITUDE: &str = "Latitude";
    pub const INDIVIDUAL_ID: &str = "Individual_ID";

    /// Context columns listed in detail output, matched by these fixed names
    pub mod features {
        pub const SST_GRADIENT: &str = "SST_Gradient";
        pub const THERMAL_FRONT_STRENGTH: &str = "Thermal_Front_Strength";
        pub const CHL_GRADIENT: &str = "CHL_Gradient";
        pub const PRODUCTIVITY_INDEX: &str = "Productivity_Index";
        pub const SSHA_GRADIENT: &str = "SSHA_Gradient";
        pub const IS_IN_EDDY: &str = "is_in_eddy";
        pub const EDDY_TYPE: &str = "eddy_type";
        pub const DIST_TO_EDDY_CENTER: &str = "dist_to_eddy_center_km";
        pub const DAILY_MOVEMENT: &str = "Daily_Movement_km";
        pub const OCEAN_COMPLEXITY_SCORE: &str = "Ocean_Complexity_Score";
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Date-only formats accepted in the date column
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Date-time formats accepted in the date column; the time of day is discarded
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Spellings accepted as true in flag columns (compared case-insensitively)
pub const TRUE_VALUES: &[&str] = &["true", "t", "yes", "y", "1"];

/// Spellings accepted as false in flag columns
pub const FALSE_VALUES: &[&str] = &["false", "f", "no", "n", "0"];

/// UTF-8 byte order mark occasionally left on the first header cell
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Maximum number of row-level error messages retained in load statistics
pub const MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Aggregation
// =============================================================================

/// Decimal digits kept in aggregated output values
pub const OUTPUT_DECIMAL_DIGITS: i32 = 6;

// =============================================================================
// Environment Overrides
// =============================================================================

/// Environment variables read by [`crate::config::IndexConfig::with_env_overrides`]
pub mod env {
    pub const DATA_PATH: &str = "OCEAN_DATA_PATH";
    pub const FILE_PATTERN: &str = "OCEAN_DATA_PATTERN";
    pub const DATE_COLUMN: &str = "OCEAN_DATE_COLUMN";
    pub const SST_COLUMN: &str = "OCEAN_SST_COLUMN";
    pub const CHL_COLUMN: &str = "OCEAN_CHL_COLUMN";
    pub const SSHA_COLUMN: &str = "OCEAN_SSHA_COLUMN";
}

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor a verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "info";
