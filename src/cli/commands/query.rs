//! Query command implementations
//!
//! Each function runs one query against the service and writes the result to
//! stdout, either as colored human-readable text or as JSON.

use super::CommandOutcome;
use super::shared::{format_value, to_json};
use crate::Error;
use crate::app::models::{
    DailyAverage, DailySummary, FieldStats, Measurement, Observation, OceanFeatures, RangeReport,
};
use crate::app::services::date_index::LoadStats;
use crate::app::services::query_service::QueryService;
use crate::cli::args::OutputFormat;
use anyhow::Context;
use chrono::NaiveDate;
use colored::*;
use serde_json::json;
use tracing::info;

/// Run a point query
pub async fn run_point(
    service: &QueryService,
    date: NaiveDate,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let result = service
        .point_query(date)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Point query for {} failed", date))?;

    let Some(average) = result else {
        return report_no_data(date, format);
    };

    match format {
        OutputFormat::Json => println!("{}", to_json(&average)?),
        OutputFormat::Human => println!("{}", render_point(&average)),
    }
    Ok(CommandOutcome::Found)
}

/// Run a range query
pub async fn run_range(
    service: &QueryService,
    start: NaiveDate,
    end: NaiveDate,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let report = service
        .range_report(start, end)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Range query for {} to {} failed", start, end))?;

    info!(
        "Range {} returned {} dates ({} records)",
        report.date_range,
        report.data.len(),
        report.total_records
    );

    match format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Human => println!("{}", render_range(&report)),
    }
    Ok(CommandOutcome::Found)
}

/// Run a detail query
pub async fn run_detail(
    service: &QueryService,
    date: NaiveDate,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let result = service
        .detail_query(date)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Detail query for {} failed", date))?;

    let Some(observations) = result else {
        return report_no_data(date, format);
    };

    match format {
        OutputFormat::Json => {
            let body = json!({
                "date": date,
                "count": observations.len(),
                "observations": observations,
            });
            println!("{}", to_json(&body)?);
        }
        OutputFormat::Human => println!("{}", render_detail(date, &observations, limit)),
    }
    Ok(CommandOutcome::Found)
}

/// Run a summary query
pub async fn run_summary(
    service: &QueryService,
    date: NaiveDate,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let result = service
        .summary_query(date)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Summary query for {} failed", date))?;

    let Some(summary) = result else {
        return report_no_data(date, format);
    };

    match format {
        OutputFormat::Json => println!("{}", to_json(&summary)?),
        OutputFormat::Human => println!("{}", render_summary(&summary)),
    }
    Ok(CommandOutcome::Found)
}

/// List every date with observations
pub async fn run_dates(
    service: &QueryService,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let dates = service
        .list_dates()
        .await
        .map_err(Error::from)
        .context("Listing available dates failed")?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "count": dates.len(), "dates": dates });
            println!("{}", to_json(&body)?);
        }
        OutputFormat::Human => {
            println!(
                "{} {}",
                "Available dates:".bright_green().bold(),
                dates.len().to_string().bright_white().bold()
            );
            for date in &dates {
                println!("  {}", date);
            }
        }
    }
    Ok(CommandOutcome::Found)
}

/// Show statistics of the dataset load
pub async fn run_stats(
    service: &QueryService,
    format: OutputFormat,
) -> anyhow::Result<CommandOutcome> {
    let stats = service
        .load_stats()
        .await
        .map_err(Error::from)
        .context("Loading dataset statistics failed")?;
    let span = service
        .date_span()
        .await
        .map_err(Error::from)
        .context("Reading dataset date span failed")?;
    let source = service.index().config().source.display().to_string();

    match format {
        OutputFormat::Json => {
            let body = json!({
                "source": source,
                "files_processed": stats.files_processed,
                "total_records": stats.total_records,
                "observations_indexed": stats.observations_indexed,
                "records_skipped": stats.records_skipped,
                "distinct_dates": stats.distinct_dates,
                "first_date": span.map(|(first, _)| first),
                "last_date": span.map(|(_, last)| last),
                "load_duration_ms": stats.load_duration.as_millis() as u64,
                "records_per_second": stats.loading_rate(),
                "errors": stats.errors,
            });
            println!("{}", to_json(&body)?);
        }
        OutputFormat::Human => println!("{}", render_stats(&source, &stats, span)),
    }
    Ok(CommandOutcome::Found)
}

fn report_no_data(date: NaiveDate, format: OutputFormat) -> anyhow::Result<CommandOutcome> {
    let message = format!("No data found for date {}", date);
    match format {
        OutputFormat::Json => println!("{}", to_json(&json!({ "error": message }))?),
        OutputFormat::Human => eprintln!("{}", message.bright_yellow()),
    }
    Ok(CommandOutcome::NoData)
}

/// Human-readable point query result
pub fn render_point(average: &DailyAverage) -> String {
    let mut lines = vec![format!(
        "{} {}",
        "Date:".bright_cyan(),
        average.date.to_string().bright_white().bold()
    )];
    for (label, value) in [
        ("SST", average.sst_value),
        ("CHL", average.chl_value),
        ("SSHA", average.ssha_value),
    ] {
        lines.push(format!("  {:<5} {}", label, format_value(value)));
    }
    lines.push(format!(
        "  {} {}",
        "Observations:".bright_cyan(),
        average.data_count
    ));
    lines.join("\n")
}

/// Human-readable range query result
pub fn render_range(report: &RangeReport) -> String {
    let mut lines = vec![format!(
        "{} {} ({} dates, {} records)",
        "Range:".bright_green().bold(),
        report.date_range,
        report.data.len(),
        report.total_records
    )];
    if report.data.is_empty() {
        lines.push(format!("  {}", "No observations in range".bright_yellow()));
    } else {
        lines.push(format!(
            "  {:<10}  {:>12}  {:>12}  {:>12}  {:>6}",
            "date", "sst", "chl", "ssha", "count"
        ));
        for day in &report.data {
            lines.push(format!(
                "  {:<10}  {:>12}  {:>12}  {:>12}  {:>6}",
                day.date.to_string(),
                format_value(day.sst_value),
                format_value(day.chl_value),
                format_value(day.ssha_value),
                day.data_count
            ));
        }
    }
    lines.join("\n")
}

/// Human-readable detail listing
pub fn render_detail(
    date: NaiveDate,
    observations: &[Observation],
    limit: Option<usize>,
) -> String {
    let shown = limit.unwrap_or(observations.len()).min(observations.len());
    let mut lines = vec![format!(
        "{} {} ({} observations)",
        "Date:".bright_cyan(),
        date.to_string().bright_white().bold(),
        observations.len()
    )];
    for obs in &observations[..shown] {
        let id = obs
            .individual_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let position = match (obs.latitude, obs.longitude) {
            (Some(lat), Some(lon)) => format!("{:.4},{:.4}", lat, lon),
            _ => "-".to_string(),
        };
        lines.push(format!(
            "  id={:<6} pos={:<20} sst={:<10} chl={:<10} ssha={}",
            id,
            position,
            format_value(obs.sst),
            format_value(obs.chl),
            format_value(obs.ssha)
        ));
        if let Some(context) = render_features(&obs.features) {
            lines.push(format!("      {}", context.bright_black()));
        }
    }
    if shown < observations.len() {
        lines.push(format!(
            "  {}",
            format!("... {} more", observations.len() - shown).bright_black()
        ));
    }
    lines.join("\n")
}

/// Context columns present on a row, or `None` when every one is absent
fn render_features(features: &OceanFeatures) -> Option<String> {
    let mut parts: Vec<String> = features
        .numeric_values()
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, v)))
        .collect();
    if let Some(in_eddy) = features.is_in_eddy {
        parts.push(format!("is_in_eddy={}", in_eddy));
    }
    if let Some(eddy_type) = &features.eddy_type {
        parts.push(format!("eddy_type={}", eddy_type));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Human-readable summary statistics
pub fn render_summary(summary: &DailySummary) -> String {
    let mut lines = vec![format!(
        "{} {} ({} observations)",
        "Date:".bright_cyan(),
        summary.date.to_string().bright_white().bold(),
        summary.stats.total_count
    )];
    lines.push(format!(
        "  {:<5} {:>12}  {:>12}  {:>12}  {:>6}",
        "field", "mean", "min", "max", "count"
    ));
    for measurement in Measurement::ALL {
        let FieldStats {
            mean,
            min,
            max,
            count,
        } = *summary.stats.field(measurement);
        lines.push(format!(
            "  {:<5} {:>12}  {:>12}  {:>12}  {:>6}",
            measurement.name(),
            format_value(mean),
            format_value(min),
            format_value(max),
            count
        ));
    }
    lines.join("\n")
}

/// Human-readable load statistics
pub fn render_stats(
    source: &str,
    stats: &LoadStats,
    span: Option<(NaiveDate, NaiveDate)>,
) -> String {
    let mut lines = vec![
        format!("{}", "Dataset Statistics".bright_green().bold()),
        format!("  {} {}", "Source:".bright_cyan(), source),
        format!("  {} {}", "Files processed:".bright_cyan(), stats.files_processed),
        format!("  {} {}", "Total records:".bright_cyan(), stats.total_records),
        format!(
            "  {} {}",
            "Observations indexed:".bright_cyan(),
            stats.observations_indexed
        ),
        format!(
            "  {} {} ({:.1}%)",
            "Records skipped:".bright_cyan(),
            stats.records_skipped,
            stats.skip_rate()
        ),
        format!("  {} {}", "Distinct dates:".bright_cyan(), stats.distinct_dates),
    ];
    if let Some((first, last)) = span {
        lines.push(format!("  {} {} to {}", "Date span:".bright_cyan(), first, last));
    }
    lines.push(format!(
        "  {} {:.2}s ({:.0} records/sec)",
        "Load time:".bright_cyan(),
        stats.load_duration.as_secs_f64(),
        stats.loading_rate()
    ));
    if !stats.errors.is_empty() {
        lines.push(format!("  {}", "First skipped rows:".bright_yellow()));
        lines.extend(stats.errors.iter().take(5).map(|e| format!("    {}", e)));
    }
    lines.join("\n")
}
