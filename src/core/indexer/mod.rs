//! Document ingestion module.
//!
//! Turns raw text into retrievable chunks. Key features:
//!
//! - Script detection (CJK-dominant text is split by characters,
//!   everything else by words)
//! - Configurable chunk size and overlap, rejecting parameters
//!   that could never advance the window
//! - Plain-text file loading with a size limit
//!
//! # Safety
//!
//! Character splitting slices through `char_indices()`, so a
//! chunk boundary never lands inside a multi-byte sequence.

pub mod chunker;
pub mod pipeline;

pub use chunker::Chunker;
pub use pipeline::{IngestionPipeline, LoadedSource};
