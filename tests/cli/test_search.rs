//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Fallback when nothing matches
//! - Unreadable or unsupported input files
//! - Output format variations

use crate::cli::test_helpers::{create_cli_test_services, create_test_notes, search_test_notes};
use notex::cli::commands::search::{execute, SearchArgs};
use notex::cli::OutputFormat;

/// Test search with valid query returning results
#[tokio::test]
async fn test_search_valid_query_human() {
    let services = create_cli_test_services();
    let (_dir, files) = create_test_notes(&search_test_notes());

    let args = SearchArgs {
        query: "fox".to_string(),
        file: files,
        limit: 3,
        source_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
    assert_eq!(services.stats().unwrap().total_sources, 3);
}

/// Test search with valid query in JSON format
#[tokio::test]
async fn test_search_valid_query_json() {
    let services = create_cli_test_services();
    let (_dir, files) = create_test_notes(&search_test_notes());

    let args = SearchArgs {
        query: "memory safety".to_string(),
        file: files,
        limit: 0,
        source_only: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

/// Test search that matches nothing falls back
#[tokio::test]
async fn test_search_fallback() {
    let services = create_cli_test_services();
    let (_dir, files) = create_test_notes(&[("a.txt", "aaa"), ("b.txt", "bbb")]);

    let args = SearchArgs {
        query: "xyz".to_string(),
        file: files,
        limit: 5,
        source_only: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Fallback search should succeed: {:?}", result.err());
}

/// Test search with an empty file only
#[tokio::test]
async fn test_search_empty_corpus() {
    let services = create_cli_test_services();
    let (_dir, files) = create_test_notes(&[("empty.txt", "")]);

    let args = SearchArgs {
        query: "anything".to_string(),
        file: files,
        limit: 5,
        source_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test that an unsupported document fails the command
#[tokio::test]
async fn test_search_unsupported_file() {
    let services = create_cli_test_services();
    let (_dir, files) = create_test_notes(&[("report.docx", "binary")]);

    let args = SearchArgs {
        query: "report".to_string(),
        file: files,
        limit: 5,
        source_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    let err = result.expect_err("docx needs conversion");
    assert!(err.to_string().contains("report.docx"), "got: {err}");
}
