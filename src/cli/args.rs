//! Command-line argument definitions for the ocean data index
//!
//! This module defines the CLI interface using the clap derive API. Global
//! options select the dataset and output style; each subcommand maps to one
//! query operation.

use crate::config::{ColumnNames, IndexConfig};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ocean data index
///
/// Answers date-based queries over sea-surface temperature, chlorophyll and
/// sea-surface-height anomaly observations loaded from a CSV dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ocean-data-index",
    version,
    about = "Query daily SST, chlorophyll and SSHA observations from a CSV dataset",
    long_about = "Loads an ocean observation dataset once, indexes it by calendar date and answers \
                  point, range, detail, summary and date-listing queries. Missing measurements are \
                  excluded from averages rather than treated as zero."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset file, or a directory searched recursively for CSV files
    ///
    /// Overrides OCEAN_DATA_PATH. Defaults to the comprehensive shark/ocean
    /// features CSV in the working directory.
    #[arg(short = 'd', long = "data", value_name = "PATH", global = true)]
    pub data_path: Option<PathBuf>,

    /// File name pattern used when --data is a directory
    #[arg(long = "pattern", value_name = "GLOB", global = true)]
    pub file_pattern: Option<String>,

    /// Name of the date column
    #[arg(long = "date-column", value_name = "NAME", global = true)]
    pub date_column: Option<String>,

    /// Name of the sea-surface temperature column
    #[arg(long = "sst-column", value_name = "NAME", global = true)]
    pub sst_column: Option<String>,

    /// Name of the chlorophyll column
    #[arg(long = "chl-column", value_name = "NAME", global = true)]
    pub chl_column: Option<String>,

    /// Name of the sea-surface-height anomaly column
    #[arg(long = "ssha-column", value_name = "NAME", global = true)]
    pub ssha_column: Option<String>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        global = true
    )]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print query results and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available query subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Averaged measurements for one date
    Point {
        /// Observation date (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        date: NaiveDate,
    },
    /// Averaged measurements for every date with data in an inclusive range
    Range {
        /// First date of the range (YYYY-MM-DD)
        #[arg(value_name = "START")]
        start: NaiveDate,
        /// Last date of the range (YYYY-MM-DD)
        #[arg(value_name = "END")]
        end: NaiveDate,
    },
    /// Raw observations recorded on one date
    Detail {
        /// Observation date (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        date: NaiveDate,
        /// Show at most this many rows in human output
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Mean, min, max and count per measurement for one date
    Summary {
        /// Observation date (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        date: NaiveDate,
    },
    /// List every date that has observations
    Dates,
    /// Show dataset load statistics
    Stats,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars only make sense for interactive human output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// Build the index configuration from defaults, environment and arguments
    pub fn index_config(&self) -> Result<IndexConfig> {
        let config = IndexConfig::default().with_env_overrides();
        self.apply_overrides(config)
    }

    /// Apply command-line overrides on top of a base configuration
    pub fn apply_overrides(&self, mut config: IndexConfig) -> Result<IndexConfig> {
        if let Some(path) = &self.data_path {
            config.source = path.clone();
        }
        if let Some(pattern) = &self.file_pattern {
            config.file_pattern = pattern.clone();
        }

        let ColumnNames {
            date, sst, chl, ssha, ..
        } = &mut config.columns;
        for (target, value) in [
            (date, &self.date_column),
            (sst, &self.sst_column),
            (chl, &self.chl_column),
            (ssha, &self.ssha_column),
        ] {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        config.show_progress = self.show_progress();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ocean-data-index").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_parse_point_command() {
        let args = parse(&["point", "2014-07-10", "--format", "json"]);

        match args.command {
            Some(Commands::Point { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2014, 7, 10).unwrap())
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Args::try_parse_from(["ocean-data-index", "point", "10/07/2014"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_range_and_globals() {
        let args = parse(&[
            "--data",
            "/srv/ocean",
            "range",
            "2014-07-09",
            "2014-07-11",
            "--sst-column",
            "temp",
        ]);

        assert!(matches!(args.command, Some(Commands::Range { .. })));
        assert_eq!(args.data_path, Some(PathBuf::from("/srv/ocean")));
        assert_eq!(args.sst_column.as_deref(), Some("temp"));
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&["dates"]);
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = parse(&["stats"]);
        assert!(args.show_progress());

        args.output_format = OutputFormat::Json;
        assert!(!args.show_progress());

        args.output_format = OutputFormat::Human;
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&[
            "--data",
            "/srv/ocean.csv",
            "--date-column",
            "day",
            "--chl-column",
            "chlorophyll",
            "-q",
            "dates",
        ]);
        let config = args.apply_overrides(IndexConfig::default()).unwrap();

        assert_eq!(config.source, PathBuf::from("/srv/ocean.csv"));
        assert_eq!(config.columns.date, "day");
        assert_eq!(config.columns.chl, "chlorophyll");
        assert_eq!(config.columns.sst, "SST_Value");
        assert!(!config.show_progress);
    }

    #[test]
    fn test_apply_overrides_validates() {
        let args = parse(&["--date-column", "", "dates"]);
        let result = args.apply_overrides(IndexConfig::default());

        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
