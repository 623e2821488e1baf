//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Note directories with specific file content
//! - Arc<Services> wrappers matching CLI execute() signatures

use notex::core::config::Config;
use notex::core::services::Services;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

/// Create a directory of note files
///
/// # Returns
/// TempDir holding the files (keep alive during test) and their paths
pub fn create_test_notes(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = temp.path().join(name);
            std::fs::write(&path, content).expect("Failed to write file");
            path
        })
        .collect();
    (temp, paths)
}

/// Standard notes for search tests
pub fn search_test_notes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("fox.txt", "the quick brown fox jumps over the lazy dog"),
        (
            "rust.md",
            "Ownership and borrowing make memory safety a compile time property.",
        ),
        ("intro.md", "这份文档介绍了项目的背景和主要内容。"),
    ]
}
