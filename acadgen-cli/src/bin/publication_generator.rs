use std::path::PathBuf;

use acadgen_core::Config;
use acadgen_generator::{output, publications};
use acadgen_parser::bibtex::{self, Entry};
use clap::Parser;
use eyre::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "publication-generator")]
#[command(about = "Generate an HTML publication table from BibTeX files")]
struct Cli {
    /// Path to save the generated HTML file
    output_html: PathBuf,

    /// BibTeX files for first-author publications
    #[arg(long, num_args = 1.., value_name = "BIB")]
    first: Vec<PathBuf>,

    /// BibTeX files for N-th author publications
    #[arg(long = "Nth", num_args = 1.., value_name = "BIB")]
    nth: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    let first = read_group(&cli.first)?;
    let nth = read_group(&cli.nth)?;
    info!(
        first = first.len(),
        nth = nth.len(),
        "parsed bibliography entries"
    );

    let html = publications::page_html(&config, first, nth);
    output::write_file(&cli.output_html, &html)?;

    info!("Generated HTML file: {}", cli.output_html.display());
    Ok(())
}

/// Parse and merge every BibTeX file of one authorship group.
fn read_group(paths: &[PathBuf]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for path in paths {
        entries.extend(bibtex::parse_file(path)?);
    }
    Ok(entries)
}
