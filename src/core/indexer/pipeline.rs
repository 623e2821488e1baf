//! File loading for ingestion.
//!
//! Reads a document from disk and turns it into the
//! `(source_tag, text)` pair that the index ingests:
//! 1. Reject formats that need the external document converter
//! 2. Enforce the file size limit
//! 3. Read the contents as UTF-8
//! 4. Derive the source tag from the file name

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{NotexError, Result};

/// Extensions that must go through the external document-to-text
/// converter before they can be ingested
pub const CONVERTER_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx"];

/// A source read from disk, ready for ingestion
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Tag the chunks will be stamped with
    pub source_tag: String,

    /// Plain text contents
    pub text: String,

    /// Where the text was read from
    pub path: PathBuf,
}

/// Loads plain-text sources from disk
#[derive(Debug, Clone)]
pub struct IngestionPipeline {
    max_file_size_mb: usize,
}

impl IngestionPipeline {
    /// Create a new pipeline
    ///
    /// # Arguments
    ///
    /// * `max_file_size_mb` - Files larger than this are refused
    pub fn new(max_file_size_mb: usize) -> Self {
        Self { max_file_size_mb }
    }

    /// Derive a source tag from a path: its file name, or the
    /// whole path when it has none
    pub fn source_tag_for(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }

    /// Check whether a path needs the external converter
    pub fn needs_conversion(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                CONVERTER_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Read a file into a [`LoadedSource`]
    ///
    /// # Arguments
    ///
    /// * `path` - File to read
    /// * `source_tag` - Explicit tag; defaults to the file name
    pub fn load(&self, path: &Path, source_tag: Option<&str>) -> Result<LoadedSource> {
        if Self::needs_conversion(path) {
            return Err(NotexError::UnsupportedFormat(format!(
                "{} requires external document conversion",
                path.display()
            )));
        }

        let metadata = fs::metadata(path)
            .map_err(|e| NotexError::IngestFailed(format!("Failed to stat {path:?}: {e}")))?;

        let limit_bytes = (self.max_file_size_mb as u64).saturating_mul(1024 * 1024);
        if metadata.len() > limit_bytes {
            return Err(NotexError::IngestFailed(format!(
                "{path:?} is {} bytes, above the {} MB limit",
                metadata.len(),
                self.max_file_size_mb
            )));
        }

        let text = fs::read_to_string(path).map_err(|e| {
            // Check if it's a UTF-8 error (likely binary file)
            if e.kind() == std::io::ErrorKind::InvalidData {
                NotexError::IngestFailed(format!("Skipping non-UTF-8 file: {path:?}"))
            } else {
                NotexError::IngestFailed(format!("Failed to read {path:?}: {e}"))
            }
        })?;

        let source_tag = source_tag
            .map(str::to_string)
            .unwrap_or_else(|| Self::source_tag_for(path));

        tracing::debug!("Loaded {:?} as '{}' ({} bytes)", path, source_tag, text.len());

        Ok(LoadedSource {
            source_tag,
            text,
            path: path.to_path_buf(),
        })
    }
}
