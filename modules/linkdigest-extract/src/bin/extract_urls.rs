use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkdigest_extract::urllist::extract_report_urls;

#[derive(Parser)]
#[command(
    name = "extract-urls",
    about = "Recover a flat crawlable URL list from a link digest"
)]
struct Cli {
    /// Digest file to parse
    #[arg(default_value = "external_links.md")]
    input: PathBuf,

    /// Output file, one quoted URL per line
    #[arg(long, default_value = "urls.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;

    let urls = extract_report_urls(&content);

    let mut out = String::new();
    for url in &urls {
        out.push_str(&format!("\"{url}\"\n"));
    }
    fs::write(&cli.output, out)
        .with_context(|| format!("cannot write {}", cli.output.display()))?;

    info!(count = urls.len(), output = %cli.output.display(), "URL list written");
    Ok(())
}
