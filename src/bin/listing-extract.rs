//! Command-line front end: extract a listing from an HTML file or stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use listing_extractor::{parse_with_options, ParseOptions};

#[derive(Parser)]
#[command(
    name = "listing-extract",
    about = "Extract a property listing from pasted real-estate HTML",
    version
)]
struct Cli {
    /// HTML file to read. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Base URL for resolving relative image paths.
    #[arg(long)]
    base_url: Option<String>,

    /// Force a pattern set (99acres, housing, magicbricks, generic).
    #[arg(long)]
    template: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let bytes = match &cli.file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let html = String::from_utf8_lossy(&bytes);

    let options = ParseOptions {
        template_hint: cli.template,
        manual_base_url: cli.base_url,
    };
    let result = parse_with_options(&html, &options);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
