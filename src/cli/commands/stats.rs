//! Stats command - index files and report chunk counts

use crate::cli::commands::ingest_files;
use crate::cli::output::{colors, format_duration, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{IndexStats, SourceInfo, SplitUnit};
use clap::Args;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Plain-text files to index (repeatable)
    #[arg(long, short = 'f', required = true)]
    pub file: Vec<PathBuf>,
}

/// Per-source line of the report
#[derive(Debug, Serialize)]
pub struct SourceLine {
    pub source: String,
    pub chunks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<SplitUnit>,
    pub ingested_at: String,
}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_chunks: usize,
    pub total_sources: usize,
    pub duration_secs: f64,
    pub sources: Vec<SourceLine>,
}

fn build_response(
    totals: IndexStats,
    sources: Vec<SourceInfo>,
    units: &HashMap<String, SplitUnit>,
    duration_secs: f64,
) -> StatsResponse {
    StatsResponse {
        total_chunks: totals.total_chunks,
        total_sources: totals.total_sources,
        duration_secs,
        sources: sources
            .into_iter()
            .map(|info| SourceLine {
                unit: units.get(&info.source_tag).copied(),
                ingested_at: info.ingested_at.to_rfc3339(),
                source: info.source_tag,
                chunks: info.chunks,
            })
            .collect(),
    }
}

/// Execute the stats command
pub async fn execute(
    args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let ingested = ingest_files(services, &args.file).await?;
    let units: HashMap<String, SplitUnit> = ingested
        .into_iter()
        .map(|stats| (stats.source_tag, stats.unit))
        .collect();

    let sources = services.list_sources()?;
    let response = build_response(
        services.stats()?,
        sources.clone(),
        &units,
        start.elapsed().as_secs_f64(),
    );

    match format {
        OutputFormat::Human => {
            println!(
                "Indexed {} chunk(s) from {} source(s) in {}\n",
                colors::number(&response.total_chunks.to_string()),
                colors::number(&response.total_sources.to_string()),
                format_duration(response.duration_secs)
            );
            for (line, info) in response.sources.iter().zip(&sources) {
                let unit = line.unit.map(|u| u.to_string()).unwrap_or_default();
                println!(
                    "  {:<32} {:>6} {} {}",
                    colors::source_tag(&line.source),
                    colors::number(&line.chunks.to_string()),
                    colors::dim(&unit),
                    colors::dim(&format_relative_time(&info.ingested_at))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
