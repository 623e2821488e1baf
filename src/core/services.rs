//! Unified service container for notex
//!
//! Owns the chunk index and the services built on it. Created once
//! by the composition root (CLI startup or a host server) and
//! shared by reference with every caller that ingests or searches.

use crate::core::config::Config;
use crate::core::error::{NotexError, Result};
use crate::core::indexer::{Chunker, IngestionPipeline};
use crate::core::search::{LexicalScorer, SearchService};
use crate::core::storage::ChunkIndex;
use crate::core::types::{IndexStats, IngestStats, ReplayReport, SearchResponse, SourceInfo};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Shared chunk index
    pub index: Arc<ChunkIndex>,

    /// Search service over the index
    pub search: Arc<SearchService>,

    /// File loader for ingestion
    pub pipeline: Arc<IngestionPipeline>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let index = Arc::new(ChunkIndex::with_capacity_limit(config.limits.max_chunks));

        let search = Arc::new(SearchService::new(
            Arc::clone(&index),
            LexicalScorer::new(config.search.topic_keywords.clone()),
            config.search.default_limit,
        ));

        let pipeline = Arc::new(IngestionPipeline::new(config.limits.max_file_size_mb));

        Self {
            index,
            search,
            pipeline,
            config: Arc::new(config),
        }
    }

    /// Chunker built from the configured chunk parameters
    pub fn default_chunker(&self) -> Result<Chunker> {
        Chunker::new(
            self.config.indexing.chunk_size,
            self.config.indexing.chunk_overlap,
        )
    }

    /// Chunk `text` and append the chunks under `source_tag`.
    ///
    /// `chunk_size` <= 0 and negative `chunk_overlap` fall back to
    /// the chunker defaults. Fails with `ConfigError` when the
    /// resolved overlap is not below the resolved size.
    ///
    /// # Returns
    ///
    /// Number of chunks created
    pub fn ingest(
        &self,
        source_tag: &str,
        text: &str,
        chunk_size: i64,
        chunk_overlap: i64,
    ) -> Result<usize> {
        let chunker = Chunker::resolve(chunk_size, chunk_overlap)?;
        Ok(self.ingest_with(&chunker, source_tag, text, None)?.chunks_created)
    }

    /// Like [`Services::ingest`], giving up before the append if
    /// `cancel` has been raised
    pub fn ingest_cancellable(
        &self,
        source_tag: &str,
        text: &str,
        chunk_size: i64,
        chunk_overlap: i64,
        cancel: &AtomicBool,
    ) -> Result<usize> {
        let chunker = Chunker::resolve(chunk_size, chunk_overlap)?;
        Ok(self
            .ingest_with(&chunker, source_tag, text, Some(cancel))?
            .chunks_created)
    }

    /// Ingest with the configured chunk parameters, returning full stats
    pub fn ingest_text(&self, source_tag: &str, text: &str) -> Result<IngestStats> {
        let chunker = self.default_chunker()?;
        self.ingest_with(&chunker, source_tag, text, None)
    }

    /// Ingest a plain-text file. The source tag defaults to the
    /// file name.
    pub fn ingest_file(&self, path: &Path, source_tag: Option<&str>) -> Result<IngestStats> {
        let source = self.pipeline.load(path, source_tag)?;
        self.ingest_text(&source.source_tag, &source.text)
    }

    fn ingest_with(
        &self,
        chunker: &Chunker,
        source_tag: &str,
        text: &str,
        cancel: Option<&AtomicBool>,
    ) -> Result<IngestStats> {
        let start = Instant::now();

        let (unit, chunks) = chunker.split_with_unit(text);

        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(NotexError::Cancelled(format!(
                "ingest of '{source_tag}' before append"
            )));
        }

        let chunks_created = self.index.append(chunks, source_tag)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingested {} chunks from source '{}' by {} in {}ms",
            chunks_created,
            source_tag,
            unit,
            duration_ms
        );

        Ok(IngestStats {
            source_tag: source_tag.to_string(),
            chunks_created,
            unit,
            duration_ms,
        })
    }

    /// Remove every chunk of a source. Unknown sources are a no-op.
    ///
    /// # Returns
    ///
    /// Number of chunks removed
    pub fn remove(&self, source_tag: &str) -> Result<usize> {
        let removed = self.index.delete_by_source(source_tag)?;
        tracing::info!("Removed {} chunks for source '{}'", removed, source_tag);
        Ok(removed)
    }

    /// Search the index. A `limit` <= 0 uses the configured default.
    pub fn search(&self, query: &str, limit: i64) -> Result<SearchResponse> {
        self.search.search(query, limit)
    }

    /// Search, giving up when `cancel` is raised
    pub fn search_cancellable(
        &self,
        query: &str,
        limit: i64,
        cancel: &AtomicBool,
    ) -> Result<SearchResponse> {
        self.search.search_with_cancel(query, limit, Some(cancel))
    }

    /// Total chunk and source counts
    pub fn stats(&self) -> Result<IndexStats> {
        self.index.stats()
    }

    /// Per-source chunk counts
    pub fn list_sources(&self) -> Result<Vec<SourceInfo>> {
        self.index.sources()
    }

    /// Re-feed stored sources through ingestion, e.g. on startup.
    ///
    /// Empty texts are skipped. A failing source is logged and
    /// recorded but does not stop the others.
    pub fn replay<I, S, T>(&self, sources: I) -> ReplayReport
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut report = ReplayReport::default();

        for (source_tag, text) in sources {
            let (source_tag, text) = (source_tag.as_ref(), text.as_ref());
            if text.is_empty() {
                report.sources_skipped += 1;
                continue;
            }

            match self.ingest_text(source_tag, text) {
                Ok(stats) => {
                    report.sources_restored += 1;
                    report.chunks_created += stats.chunks_created;
                }
                Err(e) => {
                    tracing::warn!("Failed to restore source '{}': {}", source_tag, e);
                    report
                        .failures
                        .push((source_tag.to_string(), e.to_string()));
                }
            }
        }

        tracing::info!(
            "Index restored: {} sources, {} chunks ({} skipped, {} failed)",
            report.sources_restored,
            report.chunks_created,
            report.sources_skipped,
            report.failures.len()
        );

        report
    }
}
