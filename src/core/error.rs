//! Error types and error handling for the notex retrieval core.
//!
//! This module defines the error types used throughout the
//! crate. Every failure is value-returned so the caller can
//! decide per request whether to fail or degrade gracefully.

use thiserror::Error;

/// Result type alias for notex operations
pub type Result<T> = std::result::Result<T, NotexError>;

/// Main error type for the notex core
#[derive(Error, Debug)]
pub enum NotexError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(
        "Index capacity exceeded: cannot add {requested} chunks \
         ({available} of {capacity} slots free)"
    )]
    CapacityExceeded {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Ingestion failed: {0}")]
    IngestFailed(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl NotexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            NotexError::ConfigError(_) | NotexError::UnsupportedFormat(_)
        )
    }

    /// Check if the index refused the write for lack of room
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, NotexError::CapacityExceeded { .. })
    }

    /// Check if the caller cancelled the operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NotexError::Cancelled(_))
    }
}
