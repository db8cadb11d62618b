// src/main.rs
mod utils;
mod source;
mod extractors;
mod storage;

use std::path::PathBuf;
use clap::Parser;
use utils::AppError;
use source::{client, FetchConfig};
use extractors::TableExtractor;
use storage::RecordWriter;

/// Extract "Audit category" / "Activity" tables from an HTML page into JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page or path to a saved HTML file
    #[arg(long)]
    source: String,

    /// Output JSON file path
    #[arg(long, default_value = "entra_audit_activities.json")]
    out: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Load the document
    let config = FetchConfig::default();
    let html = client::load(&args.source, &config).await?;
    tracing::info!("Loaded document ({} bytes)", html.len());

    // 4. Extract records from every table
    let report = TableExtractor::new().extract_all(&html);

    // 5. Persist
    let writer = RecordWriter::new(&args.out);
    let written = writer.write(&report.records)?;

    println!("Extracted {} rows into {}", written, writer.path().display());
    Ok(())
}
