//! In-memory chunk index.
//!
//! Holds every ingested chunk in insertion order behind a single
//! readers-writer lock. The backing vector lives in an `Arc`:
//! readers clone the `Arc` under the read lock and score outside
//! it, writers go through `Arc::make_mut`, which copies the vector
//! only while a snapshot is still alive. An in-flight search
//! therefore always sees a complete pre- or post-mutation list.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::core::error::{NotexError, Result};
use crate::core::types::{Chunk, IndexStats, SourceInfo};

/// Read-only, point-in-time view of the index
pub type Snapshot = Arc<Vec<Chunk>>;

#[derive(Debug, Default)]
struct IndexState {
    chunks: Snapshot,
    ingested_at: HashMap<String, DateTime<Utc>>,
}

/// Ordered, concurrency-safe chunk collection
#[derive(Debug, Default)]
pub struct ChunkIndex {
    state: RwLock<IndexState>,

    /// Maximum chunks held, `None` for unbounded
    capacity: Option<usize>,
}

impl ChunkIndex {
    /// Create an unbounded index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index holding at most `capacity` chunks
    /// (0 means unbounded)
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            state: RwLock::default(),
            capacity: (capacity > 0).then_some(capacity),
        }
    }

    /// Configured capacity, if bounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexState>> {
        self.state
            .read()
            .map_err(|e| NotexError::StorageError(format!("Lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexState>> {
        self.state
            .write()
            .map_err(|e| NotexError::StorageError(format!("Lock poisoned: {e}")))
    }

    /// Append chunk texts for a source.
    ///
    /// Each chunk is stamped with `source_tag` and the next
    /// ordinal for that source, so ordinals stay contiguous from
    /// 0 even if a source is appended more than once. The append
    /// is all-or-nothing: a capacity rejection leaves the index
    /// untouched.
    ///
    /// # Returns
    ///
    /// Number of chunks appended
    pub fn append(&self, texts: Vec<String>, source_tag: &str) -> Result<usize> {
        let count = texts.len();
        if count == 0 {
            return Ok(0);
        }

        let mut state = self.write()?;

        if let Some(capacity) = self.capacity {
            let available = capacity.saturating_sub(state.chunks.len());
            if count > available {
                return Err(NotexError::CapacityExceeded {
                    requested: count,
                    available,
                    capacity,
                });
            }
        }

        let first_ordinal = state
            .chunks
            .iter()
            .filter(|chunk| chunk.source_tag == source_tag)
            .count();

        let chunks = Arc::make_mut(&mut state.chunks);
        chunks.reserve(count);
        chunks.extend(texts.into_iter().enumerate().map(|(i, text)| Chunk {
            text,
            source_tag: source_tag.to_string(),
            ordinal: first_ordinal + i,
        }));
        let total = chunks.len();

        state
            .ingested_at
            .insert(source_tag.to_string(), Utc::now());

        tracing::debug!(
            "Appended {} chunks for '{}' (total: {})",
            count,
            source_tag,
            total
        );

        Ok(count)
    }

    /// Remove every chunk of a source.
    ///
    /// Removing an unknown source is a no-op.
    ///
    /// # Returns
    ///
    /// Number of chunks removed
    pub fn delete_by_source(&self, source_tag: &str) -> Result<usize> {
        let mut state = self.write()?;

        let before = state.chunks.len();
        if state.chunks.iter().any(|chunk| chunk.source_tag == source_tag) {
            Arc::make_mut(&mut state.chunks).retain(|chunk| chunk.source_tag != source_tag);
        }
        state.ingested_at.remove(source_tag);

        Ok(before - state.chunks.len())
    }

    /// Take a consistent, read-only view of the current chunks
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Arc::clone(&self.read()?.chunks))
    }

    /// Number of chunks currently held
    pub fn size(&self) -> Result<usize> {
        Ok(self.read()?.chunks.len())
    }

    /// Whether the index holds no chunks
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }

    /// Total chunk and distinct source counts
    pub fn stats(&self) -> Result<IndexStats> {
        let state = self.read()?;
        Ok(IndexStats {
            total_chunks: state.chunks.len(),
            total_sources: state.ingested_at.len(),
        })
    }

    /// One summary per source, in order of first appearance
    pub fn sources(&self) -> Result<Vec<SourceInfo>> {
        let state = self.read()?;

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for chunk in state.chunks.iter() {
            let count = counts.entry(chunk.source_tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(chunk.source_tag.as_str());
            }
            *count += 1;
        }

        Ok(order
            .into_iter()
            .map(|tag| SourceInfo {
                source_tag: tag.to_string(),
                chunks: counts.get(tag).copied().unwrap_or(0),
                ingested_at: state
                    .ingested_at
                    .get(tag)
                    .copied()
                    .unwrap_or_else(Utc::now),
            })
            .collect())
    }
}
