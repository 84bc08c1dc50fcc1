//! Shared components for CLI commands
//!
//! Logging setup, service construction and small formatting helpers used by
//! every query command.

use crate::app::services::date_index::DatasetIndex;
use crate::app::services::query_service::QueryService;
use crate::cli::args::Args;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence; otherwise the level comes from the verbosity
/// flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ocean_data_index={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build a lazily loading query service from the command-line configuration
pub fn build_service(args: &Args) -> Result<QueryService> {
    let config = args.index_config()?;
    debug!("Index configuration: {:?}", config);
    Ok(QueryService::new(Arc::new(DatasetIndex::new(config))))
}

/// Serialize a value as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format an optional measurement for human output
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.6}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        None => "n/a".to_string(),
    }
}
