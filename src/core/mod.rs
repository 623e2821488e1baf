//! Core domain logic (adapter-agnostic)
//!
//! This module contains all logic that is independent of how
//! notex is driven (CLI, embedding host server, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **indexer**: Chunking and file loading
//! - **storage**: Shared in-memory chunk index
//! - **search**: Lexical scoring and ranked retrieval
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{NotexError, Result};
pub use services::Services;
