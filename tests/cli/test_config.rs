//! Tests for the show-config CLI command

use crate::cli::test_helpers::create_cli_test_services;
use notex::cli::commands::config::{execute, ConfigArgs};
use notex::cli::OutputFormat;

#[tokio::test]
async fn test_config_human() {
    let services = create_cli_test_services();

    let result = execute(ConfigArgs { paths: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_config_json_with_paths() {
    let services = create_cli_test_services();

    let result = execute(ConfigArgs { paths: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
