//! Command implementations for the ocean data index CLI
//!
//! This module contains command dispatch. Query commands live in [`query`];
//! logging setup and helpers shared between commands live in [`shared`].

pub mod query;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Context;
use tracing::debug;

/// Result of a command that ran without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The query produced a result
    Found,
    /// The requested date has no observations
    NoData,
}

/// Main command runner for the ocean data index
///
/// Sets up logging, builds the query service from the layered configuration
/// and dispatches to the requested query.
pub async fn run(args: Args) -> anyhow::Result<CommandOutcome> {
    shared::setup_logging(&args)?;

    let Some(command) = args.command.clone() else {
        anyhow::bail!("No command given");
    };
    debug!("Running command: {:?}", command);

    let service = shared::build_service(&args).context("Invalid configuration")?;
    let format = args.output_format;

    match command {
        Commands::Point { date } => query::run_point(&service, date, format).await,
        Commands::Range { start, end } => query::run_range(&service, start, end, format).await,
        Commands::Detail { date, limit } => {
            query::run_detail(&service, date, limit, format).await
        }
        Commands::Summary { date } => query::run_summary(&service, date, format).await,
        Commands::Dates => query::run_dates(&service, format).await,
        Commands::Stats => query::run_stats(&service, format).await,
    }
}
