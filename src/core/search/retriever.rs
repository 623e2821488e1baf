//! Ranked retrieval over the chunk index.
//!
//! This module provides the SearchService: it snapshots the
//! index, scores every chunk with the lexical scorer, and returns
//! the best `limit` chunks. When nothing scores positively it
//! falls back to the first chunks in insertion order, so prompt
//! assembly always receives some context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::{NotexError, Result};
use crate::core::search::scorer::LexicalScorer;
use crate::core::storage::ChunkIndex;
use crate::core::types::{Chunk, SearchHit, SearchResponse};

/// Result count substituted when the caller passes a limit <= 0
pub const DEFAULT_LIMIT: usize = 5;

/// Chunks scored between two cancellation checks
pub const CANCEL_CHECK_INTERVAL: usize = 256;

/// Lexical search service
pub struct SearchService {
    index: Arc<ChunkIndex>,
    scorer: LexicalScorer,
    default_limit: usize,
}

impl SearchService {
    /// Create a new search service
    ///
    /// A `default_limit` of 0 is replaced by [`DEFAULT_LIMIT`].
    pub fn new(index: Arc<ChunkIndex>, scorer: LexicalScorer, default_limit: usize) -> Self {
        let default_limit = if default_limit == 0 {
            DEFAULT_LIMIT
        } else {
            default_limit
        };

        Self {
            index,
            scorer,
            default_limit,
        }
    }

    /// Scorer used for ranking
    pub fn scorer(&self) -> &LexicalScorer {
        &self.scorer
    }

    /// Limit used when the caller passes one <= 0
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    fn resolve_limit(&self, limit: i64) -> usize {
        if limit <= 0 {
            self.default_limit
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        }
    }

    /// Execute a search
    pub fn search(&self, query: &str, limit: i64) -> Result<SearchResponse> {
        self.search_with_cancel(query, limit, None)
    }

    /// Execute a search that gives up when `cancel` is raised.
    ///
    /// The flag is checked every [`CANCEL_CHECK_INTERVAL`] chunks.
    pub fn search_with_cancel(
        &self,
        query: &str,
        limit: i64,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchResponse> {
        let start = Instant::now();
        let limit = self.resolve_limit(limit);

        // Read lock is held only while cloning the Arc
        let snapshot = self.index.snapshot()?;

        tracing::debug!(
            "Searching for '{}' over {} chunks (limit {})",
            query,
            snapshot.len(),
            limit
        );

        if snapshot.is_empty() {
            tracing::debug!("No chunks available for search");
            return Ok(Self::response(query, Vec::new(), false, start));
        }

        let prepared = self.scorer.prepare(query);

        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for (idx, chunk) in snapshot.iter().enumerate() {
            if idx % CANCEL_CHECK_INTERVAL == 0 {
                if let Some(flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        return Err(NotexError::Cancelled(format!(
                            "search for '{query}' after scoring {idx} of {} chunks",
                            snapshot.len()
                        )));
                    }
                }
            }

            let score = self.scorer.score(&prepared, &chunk.text);
            if score > 0.0 {
                candidates.push((idx, score));
            }
        }

        tracing::debug!("Found {} matching chunks", candidates.len());

        if candidates.is_empty() {
            let take = limit.min(snapshot.len());
            tracing::warn!(
                "No chunk matched '{}', falling back to the first {} chunks",
                query,
                take
            );
            let results = snapshot[..take]
                .iter()
                .map(|chunk| Self::hit(chunk, 0.0))
                .collect();
            return Ok(Self::response(query, results, true, start));
        }

        // Stable: equal scores keep insertion order
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.truncate(limit);

        if let Some((_, best)) = candidates.first() {
            tracing::debug!(
                "Returning top {} results (best score: {:.2})",
                candidates.len(),
                best
            );
        }

        let results = candidates
            .into_iter()
            .map(|(idx, score)| Self::hit(&snapshot[idx], score))
            .collect();

        Ok(Self::response(query, results, false, start))
    }

    fn hit(chunk: &Chunk, score: f64) -> SearchHit {
        SearchHit {
            score,
            text: chunk.text.clone(),
            source_tag: chunk.source_tag.clone(),
            ordinal: chunk.ordinal,
        }
    }

    fn response(
        query: &str,
        results: Vec<SearchHit>,
        fallback: bool,
        start: Instant,
    ) -> SearchResponse {
        let count = results.len();
        SearchResponse {
            query: query.to_string(),
            results,
            count,
            fallback,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}
