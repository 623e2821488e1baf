//! Search command - index files and rank their chunks against a query

use crate::cli::commands::ingest_files;
use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchResponse;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Question or keywords to search for
    pub query: String,

    /// Plain-text files to index before searching (repeatable)
    #[arg(long, short = 'f', required = true)]
    pub file: Vec<PathBuf>,

    /// Maximum number of results (<= 0 uses the configured default)
    #[arg(long, short = 'k', default_value = "0", allow_hyphen_values = true)]
    pub limit: i64,

    /// Only show source tags (no content)
    #[arg(long)]
    pub source_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub source: String,
    pub ordinal: usize,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub fallback: bool,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

impl SearchResponseOutput {
    fn from_response(response: SearchResponse, source_only: bool) -> Self {
        Self {
            query: response.query,
            total_results: response.count,
            fallback: response.fallback,
            duration_ms: response.duration_ms,
            results: response
                .results
                .into_iter()
                .enumerate()
                .map(|(i, hit)| SearchResultItem {
                    rank: i + 1,
                    source: hit.source_tag,
                    ordinal: hit.ordinal,
                    score: hit.score,
                    text: if source_only { None } else { Some(hit.text) },
                })
                .collect(),
        }
    }
}

/// Run the search on a blocking thread, raising the cancel flag
/// once the configured request timeout elapses
async fn search_with_timeout(
    services: &Arc<Services>,
    query: &str,
    limit: i64,
) -> Result<SearchResponse, Box<dyn std::error::Error>> {
    let timeout = Duration::from_secs(services.config.limits.request_timeout_sec);
    let cancel = Arc::new(AtomicBool::new(false));

    let mut task = {
        let services = Arc::clone(services);
        let cancel = Arc::clone(&cancel);
        let query = query.to_string();
        tokio::task::spawn_blocking(move || services.search_cancellable(&query, limit, &cancel))
    };

    tokio::select! {
        joined = &mut task => Ok(joined??),
        _ = tokio::time::sleep(timeout) => {
            cancel.store(true, Ordering::Relaxed);
            tracing::warn!("Search exceeded {}s, cancelling", timeout.as_secs());
            Ok(task.await??)
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    ingest_files(services, &args.file).await?;

    let response = search_with_timeout(services, &args.query, args.limit).await?;
    let output = SearchResponseOutput::from_response(response, args.source_only);

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No chunks indexed to search for '{}'",
                    colors::label(&output.query)
                );
                return Ok(());
            }

            if output.fallback {
                println!(
                    "{} nothing matched '{}', showing the first {} chunk(s):\n",
                    colors::warning("Fallback:"),
                    colors::label(&output.query),
                    colors::number(&output.total_results.to_string())
                );
            } else {
                println!(
                    "Found {} result(s) for '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&output.query)
                );
            }

            for result in &output.results {
                if args.source_only {
                    println!("{}", colors::source_tag(&result.source));
                    continue;
                }

                println!(
                    "[{}] {} #{} {}",
                    colors::rank(&result.rank.to_string()),
                    colors::source_tag(&result.source),
                    result.ordinal,
                    colors::score(&format!("(score: {:.2})", result.score))
                );
                if let Some(text) = &result.text {
                    for line in preview(text, 5) {
                        println!("    {}", colors::dim(&line));
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
