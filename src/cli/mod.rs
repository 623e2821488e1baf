//! CLI adapter for notex
//!
//! Provides a command-line interface over the chunker, index and
//! retriever. Each invocation builds a fresh in-memory index from
//! the files it is given.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::NotexError;
use clap::{Parser, Subcommand};

/// Notex - lexical retrieval over your notes
///
/// Split documents into overlapping chunks and rank them against a
/// question with a lexical heuristic. Chinese text is chunked by
/// character, everything else by word.
#[derive(Parser, Debug)]
#[command(name = "notex")]
#[command(version)]
#[command(about = "Lexical chunk index and retriever", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a file would be split into chunks
    Chunk(commands::ChunkArgs),

    /// Index files and search them
    Search(commands::SearchArgs),

    /// Index files and show chunk counts per source
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  notex completions bash > ~/.local/share/bash-completion/completions/notex
    ///   zsh:   notex completions zsh > ~/.zfunc/_notex
    ///   fish:  notex completions fish > ~/.config/fish/completions/notex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    // Resolve config location
    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match command {
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => Ok(()),
    }
}

/// Process exit status for a failed command: 2 for bad requests
/// (invalid configuration or input), 1 for everything else
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<NotexError>() {
        Some(e) if e.is_bad_request() => 2,
        _ => 1,
    }
}
