//! Notex CLI - command-line interface for the notex retriever
//!
//! Each run builds a fresh in-memory index from the given files.
//!
//! # Examples
//!
//! ```bash
//! # Preview chunking
//! notex chunk notes.md --chunk-size 200 --overlap 20
//!
//! # Search a set of files
//! notex search "what is this about" -f notes.md -f todo.txt -k 3
//!
//! # Chunk counts per source
//! notex stats -f notes.md -f todo.txt
//!
//! # Show configuration
//! notex show-config --format json
//! ```

use clap::Parser;
use notex::cli::output::print_error;
use notex::cli::{exit_code, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr; NOTEX_LOG_FORMAT=json switches to JSON lines
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "notex=warn".into());
    let json = std::env::var("NOTEX_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(exit_code(e.as_ref()));
    }
}
