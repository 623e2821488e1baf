//! Configuration management for the notex retrieval core.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{NotexError, Result};
use crate::core::indexer::chunker::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::core::search::{default_topic_keywords, DEFAULT_LIMIT};
use crate::core::xdg::{XdgDirs, LOCAL_CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Units (words, or characters for CJK text) per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Units shared by consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results returned when the caller asks for <= 0
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Query substrings that earn the topic bonus
    #[serde(default = "default_topic_keywords")]
    pub topic_keywords: Vec<String>,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum chunks held by the index (0 = unbounded)
    #[serde(default)]
    pub max_chunks: usize,

    /// Maximum file size in MB accepted by file ingestion
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Timeout in seconds that hosts apply around language-model
    /// calls built on search results
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

// Default value functions
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_max_file_size() -> usize {
    10
}

fn default_request_timeout() -> u64 {
    300
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            topic_keywords: default_topic_keywords(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_chunks: 0,
            max_file_size_mb: default_max_file_size(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NotexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. NOTEX_CONFIG env var
    /// 2. XDG config file (~/.config/notex/config.toml)
    /// 3. ./notex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("NOTEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Indexing configuration
        if let Ok(chunk_size) = env::var("NOTEX_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.indexing.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("NOTEX_CHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.indexing.chunk_overlap = o;
            }
        }

        // Search configuration
        if let Ok(default_limit) = env::var("NOTEX_DEFAULT_LIMIT") {
            if let Ok(limit) = default_limit.parse() {
                self.search.default_limit = limit;
            }
        }
        if let Ok(keywords) = env::var("NOTEX_TOPIC_KEYWORDS") {
            self.search.topic_keywords = keywords
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
        }

        // Limits configuration
        if let Ok(max_chunks) = env::var("NOTEX_MAX_CHUNKS") {
            if let Ok(max) = max_chunks.parse() {
                self.limits.max_chunks = max;
            }
        }
        if let Ok(max_size) = env::var("NOTEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.limits.max_file_size_mb = size;
            }
        }
        if let Ok(timeout) = env::var("NOTEX_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.limits.request_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(NotexError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.indexing.chunk_overlap >= self.indexing.chunk_size {
            return Err(NotexError::ConfigError(
                "Chunk overlap must be less than chunk size".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(NotexError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.limits.request_timeout_sec == 0 {
            return Err(NotexError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {}", self.indexing.chunk_size);
        tracing::info!("  Chunk overlap: {}", self.indexing.chunk_overlap);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!(
            "  Topic keywords: {} keywords",
            self.search.topic_keywords.len()
        );
        if self.limits.max_chunks == 0 {
            tracing::info!("  Max chunks: unbounded");
        } else {
            tracing::info!("  Max chunks: {}", self.limits.max_chunks);
        }
        tracing::info!("  Max file size: {} MB", self.limits.max_file_size_mb);
        tracing::info!("  Request timeout: {}s", self.limits.request_timeout_sec);
    }
}
