//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'p')]
    pub paths: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = args
        .paths
        .then(|| XdgDirs::new().config_file().to_string_lossy().into_owned());

    let response = ConfigResponse {
        config_file,
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("{}", colors::label("Configuration:"));
            if let Some(path) = &response.config_file {
                println!("  config_file: {path}");
            }
            println!("  indexing:");
            println!("    chunk_size: {}", config.indexing.chunk_size);
            println!("    chunk_overlap: {}", config.indexing.chunk_overlap);
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!(
                "    topic_keywords: {}",
                config.search.topic_keywords.join(", ")
            );
            println!("  limits:");
            let max_chunks = match config.limits.max_chunks {
                0 => "unbounded".to_string(),
                n => n.to_string(),
            };
            println!("    max_chunks: {max_chunks}");
            println!("    max_file_size_mb: {}", config.limits.max_file_size_mb);
            println!(
                "    request_timeout_sec: {}",
                config.limits.request_timeout_sec
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
