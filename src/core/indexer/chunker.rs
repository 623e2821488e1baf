//! Script-aware text chunking.
//!
//! Splits text into overlapping windows. The window unit is chosen
//! per input: CJK-dominant text is windowed over characters, all
//! other text over whitespace-delimited words. Character windows
//! are sliced through `char_indices()`, so every boundary falls on
//! a valid UTF-8 character boundary.
//!
//! # Example
//!
//! ```
//! use notex::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(5, 1).unwrap();
//! let chunks = chunker.split("the quick brown fox jumps over the lazy dog");
//!
//! assert_eq!(chunks, vec!["the quick brown fox jumps", "jumps over the lazy dog"]);
//! ```

use std::ops::Range;

use crate::core::error::{NotexError, Result};
use crate::core::types::SplitUnit;

/// Chunk size substituted when the caller passes a value <= 0
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Overlap substituted when the caller passes a negative value
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Fraction of CJK ideographs above which text is split by characters
pub const CJK_RATIO_THRESHOLD: f64 = 0.3;

/// Overlapping window chunker.
///
/// Sizes are measured in the unit selected for each input
/// (characters or words), never in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    /// Units per chunk
    chunk_size: usize,

    /// Units shared by consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a chunker from already-resolved parameters.
    ///
    /// # Errors
    ///
    /// Returns [`NotexError::ConfigError`] if `chunk_size` is 0 or
    /// `overlap >= chunk_size`. Windowing would never advance with
    /// such parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use notex::core::indexer::Chunker;
    ///
    /// let chunker = Chunker::new(512, 64).unwrap();
    /// assert_eq!(chunker.chunk_size(), 512);
    /// assert_eq!(chunker.overlap(), 64);
    ///
    /// assert!(Chunker::new(10, 10).is_err());
    /// ```
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(NotexError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if overlap >= chunk_size {
            return Err(NotexError::ConfigError(format!(
                "Chunk overlap ({overlap}) must be less than chunk size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from caller-supplied parameters.
    ///
    /// A `chunk_size` <= 0 becomes [`DEFAULT_CHUNK_SIZE`] and a
    /// negative `overlap` becomes [`DEFAULT_CHUNK_OVERLAP`]. The
    /// resolved pair is then checked as in [`Chunker::new`].
    pub fn resolve(chunk_size: i64, overlap: i64) -> Result<Self> {
        let chunk_size = if chunk_size <= 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            usize::try_from(chunk_size)
                .map_err(|e| NotexError::ConfigError(format!("Invalid chunk size: {e}")))?
        };

        let overlap = if overlap < 0 {
            DEFAULT_CHUNK_OVERLAP
        } else {
            usize::try_from(overlap)
                .map_err(|e| NotexError::ConfigError(format!("Invalid chunk overlap: {e}")))?
        };

        Self::new(chunk_size, overlap)
    }

    /// Get the chunk size in units.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in units.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance between the starts of consecutive chunks (always > 0)
    pub fn step(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// Classify text by the share of CJK Unified Ideographs
    /// (U+4E00..=U+9FFF) among all of its characters.
    pub fn detect_unit(text: &str) -> SplitUnit {
        let mut total = 0usize;
        let mut cjk = 0usize;
        for c in text.chars() {
            total += 1;
            if is_cjk_ideograph(c) {
                cjk += 1;
            }
        }

        if total > 0 && (cjk as f64 / total as f64) > CJK_RATIO_THRESHOLD {
            SplitUnit::Chars
        } else {
            SplitUnit::Words
        }
    }

    /// Split text into overlapping chunk strings.
    ///
    /// Empty (or, for word splitting, whitespace-only) text
    /// yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with_unit(text).1
    }

    /// Split text and report the unit that was used.
    pub fn split_with_unit(&self, text: &str) -> (SplitUnit, Vec<String>) {
        let unit = Self::detect_unit(text);
        let chunks = match unit {
            SplitUnit::Chars => self.split_chars(text),
            SplitUnit::Words => self.split_words(text),
        };

        tracing::debug!(
            "Split {} bytes by {} into {} chunks (size={}, overlap={})",
            text.len(),
            unit,
            chunks.len(),
            self.chunk_size,
            self.overlap
        );

        (unit, chunks)
    }

    /// Window over characters, slicing the original string at
    /// character boundaries.
    fn split_chars(&self, text: &str) -> Vec<String> {
        let char_indices: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();

        self.windows(char_indices.len())
            .into_iter()
            .map(|range| {
                let byte_start = char_indices[range.start];
                let byte_end = if range.end < char_indices.len() {
                    char_indices[range.end]
                } else {
                    text.len()
                };
                text[byte_start..byte_end].to_string()
            })
            .collect()
    }

    /// Window over whitespace-delimited words, re-joined with single spaces.
    fn split_words(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();

        self.windows(words.len())
            .into_iter()
            .map(|range| words[range].join(" "))
            .collect()
    }

    /// Window ranges over a sequence of `len` units.
    ///
    /// Starts at 0, advances by `step()`, and stops after the
    /// first window whose end reaches `len`.
    pub fn windows(&self, len: usize) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;

        while start < len {
            let end = (start + self.chunk_size).min(len);
            ranges.push(start..end);
            if end >= len {
                break;
            }
            start += self.step();
        }

        ranges
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}
