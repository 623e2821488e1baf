//! Chunk command - preview how a file is split

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::indexer::Chunker;
use crate::core::services::Services;
use crate::core::types::SplitUnit;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Plain-text file to split
    pub file: PathBuf,

    /// Chunk length in characters or words (<= 0 uses 1000; default from config)
    #[arg(long, allow_hyphen_values = true)]
    pub chunk_size: Option<i64>,

    /// Overlap between chunks (negative uses 200; default from config)
    #[arg(long, allow_hyphen_values = true)]
    pub overlap: Option<i64>,
}

/// One chunk of the preview
#[derive(Debug, Serialize)]
pub struct ChunkItem {
    pub ordinal: usize,
    pub length: usize,
    pub text: String,
}

/// Chunk preview response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub source_tag: String,
    pub unit: SplitUnit,
    pub chunk_size: usize,
    pub overlap: usize,
    pub total_chunks: usize,
    pub chunks: Vec<ChunkItem>,
}

/// Build the chunker for this invocation, falling back to config
/// values for parameters not given on the command line
fn resolve_chunker(
    args: &ChunkArgs,
    services: &Services,
) -> Result<Chunker, Box<dyn std::error::Error>> {
    let indexing = &services.config.indexing;
    let chunk_size = args
        .chunk_size
        .unwrap_or(i64::try_from(indexing.chunk_size)?);
    let overlap = args
        .overlap
        .unwrap_or(i64::try_from(indexing.chunk_overlap)?);

    Ok(Chunker::resolve(chunk_size, overlap)?)
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let chunker = resolve_chunker(&args, services)?;
    let source = services.pipeline.load(&args.file, None)?;

    let (unit, chunks) = chunker.split_with_unit(&source.text);

    let response = ChunkResponse {
        source_tag: source.source_tag,
        unit,
        chunk_size: chunker.chunk_size(),
        overlap: chunker.overlap(),
        total_chunks: chunks.len(),
        chunks: chunks
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| ChunkItem {
                ordinal,
                length: match unit {
                    SplitUnit::Chars => text.chars().count(),
                    SplitUnit::Words => text.split_whitespace().count(),
                },
                text,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} split by {} into {} chunk(s) (size {}, overlap {})\n",
                colors::source_tag(&response.source_tag),
                colors::label(&response.unit.to_string()),
                colors::number(&response.total_chunks.to_string()),
                response.chunk_size,
                response.overlap
            );
            for chunk in &response.chunks {
                println!(
                    "[{}] {}",
                    colors::rank(&chunk.ordinal.to_string()),
                    colors::dim(&format!("({} {})", chunk.length, response.unit))
                );
                for line in preview(&chunk.text, 3) {
                    println!("    {line}");
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
