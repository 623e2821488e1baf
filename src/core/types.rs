//! Core data types for the notex retrieval core.
//!
//! This module defines the data structures shared by the
//! chunker, the index and the retriever, including chunks,
//! search hits and the statistics reported to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single retrievable text chunk.
///
/// Immutable once created. Chunks of one source carry contiguous
/// ordinals starting at 0, in the order the chunker produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk's text content (never empty)
    pub text: String,

    /// Identifier of the originating source
    pub source_tag: String,

    /// Zero-based position within the source's chunk sequence
    pub ordinal: usize,
}

/// Unit the chunker windows over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitUnit {
    /// Unicode scalar values (CJK-dominant text)
    Chars,
    /// Whitespace-delimited words
    Words,
}

impl std::fmt::Display for SplitUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitUnit::Chars => write!(f, "chars"),
            SplitUnit::Words => write!(f, "words"),
        }
    }
}

/// A chunk returned by search, with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Lexical relevance score (0.0 for fallback hits)
    pub score: f64,

    /// Chunk text content
    pub text: String,

    /// Originating source
    pub source_tag: String,

    /// Position within the source
    pub ordinal: usize,
}

/// Response from a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query as given by the caller
    pub query: String,

    /// Ranked hits (or the insertion-order prefix on fallback)
    pub results: Vec<SearchHit>,

    /// Number of hits returned
    pub count: usize,

    /// True when no chunk scored positively and the
    /// insertion-order prefix was returned instead
    pub fallback: bool,

    /// Search duration in milliseconds
    pub duration_ms: u64,
}

/// Statistics from ingesting one source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Source the chunks were stamped with
    pub source_tag: String,

    /// Chunks appended to the index
    pub chunks_created: usize,

    /// Unit the text was split by
    pub unit: SplitUnit,

    /// Ingest duration in milliseconds
    pub duration_ms: u64,
}

/// Diagnostic counts for the whole index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Chunks currently held
    pub total_chunks: usize,

    /// Distinct source tags currently held
    pub total_sources: usize,
}

/// Per-source summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source identifier
    pub source_tag: String,

    /// Chunks held for this source
    pub chunks: usize,

    /// Time of the most recent append for this source
    pub ingested_at: DateTime<Utc>,
}

/// Outcome of replaying stored sources into a fresh index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Sources ingested successfully
    pub sources_restored: usize,

    /// Sources skipped because their text was empty
    pub sources_skipped: usize,

    /// Sources whose ingestion failed, with the reason
    pub failures: Vec<(String, String)>,

    /// Chunks appended across all restored sources
    pub chunks_created: usize,
}
