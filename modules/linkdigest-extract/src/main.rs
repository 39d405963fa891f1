use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkdigest_common::ExtractionRules;

#[derive(Parser)]
#[command(
    name = "linkdigest",
    about = "Extract Facebook and external link digests from a JSON post export"
)]
struct Cli {
    /// Input JSON file (Apify group export)
    input: PathBuf,

    /// Output directory for the digest files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(input = %cli.input.display(), output_dir = %cli.output_dir.display(), "Starting digest run");

    let rules = ExtractionRules::default();
    let stats = linkdigest_extract::run(&cli.input, &cli.output_dir, &rules)
        .with_context(|| format!("digest run failed for {}", cli.input.display()))?;

    println!("{stats}");
    Ok(())
}
