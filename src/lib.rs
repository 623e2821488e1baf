//! Notex - Lexical Chunk Index and Retriever
//!
//! An in-process retrieval layer for question answering over
//! user-supplied notes. Text is split into overlapping chunks,
//! stored in a shared in-memory index and ranked against queries
//! with a lexical heuristic. No embeddings are involved.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg
//!   - indexer (script-aware chunking, file loading)
//!   - storage (concurrent chunk index)
//!   - search (lexical scoring, retrieval with fallback)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - CJK-aware chunking (character windows for ideographic text,
//!   word windows otherwise)
//! - Concurrent ingest and search over snapshot reads
//! - Fallback to leading chunks when nothing matches
//!
//! # Example
//!
//! ```
//! use notex::{Config, Services};
//!
//! let services = Services::new(Config::default());
//! services
//!     .ingest("notes.md", "the quick brown fox jumps over the lazy dog", 5, 1)
//!     .unwrap();
//!
//! let response = services.search("fox", 1).unwrap();
//! assert_eq!(response.results[0].ordinal, 0);
//! ```

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{NotexError, Result};
pub use core::indexer::Chunker;
pub use core::search::{LexicalScorer, SearchService};
pub use core::services::Services;
pub use core::storage::ChunkIndex;
pub use core::types::*;
