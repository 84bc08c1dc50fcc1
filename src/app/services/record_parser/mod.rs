//! CSV record parser for ocean observation datasets
//!
//! This module turns rows of the source table into typed [`Observation`]s.
//! A row without a usable date is rejected; an unusable measurement only marks
//! that one field absent.
//!
//! ## Architecture
//!
//! - [`parser`] - File and reader handling, header analysis, record loop
//! - [`column_mapping`] - Resolution of configured column names to CSV indices
//! - [`field_parsers`] - Date and numeric field conversion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ocean_data_index::app::services::record_parser::CsvRecordParser;
//! use ocean_data_index::config::ColumnNames;
//!
//! let data = "Date,SST_Value,CHL_Value,SSHA_Value\n2014-07-10,23.1,,0.02\n";
//! let parser = CsvRecordParser::new(ColumnNames::default());
//! let result = parser
//!     .parse_reader(data.as_bytes(), std::path::Path::new("inline.csv"))
//!     .unwrap();
//!
//! assert_eq!(result.stats.observations_parsed, 1);
//! assert_eq!(result.observations[0].chl, None);
//! ```
//!
//! [`Observation`]: crate::app::models::Observation

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::{CsvRecordParser, parse_observation_record};
pub use stats::{ParseResult, ParseStats};
