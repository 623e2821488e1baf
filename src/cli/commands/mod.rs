//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod chunk;
pub mod completions;
pub mod config;
pub mod search;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use chunk::ChunkArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use stats::StatsArgs;

use crate::core::services::Services;
use crate::core::types::IngestStats;
use std::path::PathBuf;
use std::sync::Arc;

/// Ingest every file into the shared index, one blocking task per file.
///
/// Stats are returned in the order the files were given.
pub async fn ingest_files(
    services: &Arc<Services>,
    files: &[PathBuf],
) -> Result<Vec<IngestStats>, Box<dyn std::error::Error>> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let services = Arc::clone(services);
            tokio::task::spawn_blocking(move || services.ingest_file(&path, None))
        })
        .collect();

    let mut stats = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(files) {
        let ingested = handle
            .await?
            .map_err(|e| format!("Failed to ingest '{}': {}", path.display(), e))?;
        stats.push(ingested);
    }

    Ok(stats)
}
