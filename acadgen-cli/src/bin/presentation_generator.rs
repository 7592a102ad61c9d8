use std::path::PathBuf;

use acadgen_core::Config;
use acadgen_generator::{chart, output, presentations};
use acadgen_parser::presentation;
use chrono::Local;
use clap::Parser;
use eyre::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "presentation-generator")]
#[command(about = "Generate HTML presentation tables from log files")]
struct Cli {
    /// Path to save the generated HTML file
    output_html: PathBuf,

    /// Domestic presentations log file
    domestic: PathBuf,

    /// International presentations log file
    international: PathBuf,

    /// Also write an SVG chart of yearly counts to this path
    #[arg(long, value_name = "SVG")]
    fig: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    let domestic = presentation::parse_file(&cli.domestic)?;
    let international = presentation::parse_file(&cli.international)?;
    info!(
        domestic = domestic.len(),
        international = international.len(),
        "parsed presentation records"
    );

    let figure = cli.fig.as_ref().map(|p| p.to_string_lossy().to_string());
    let today = Local::now().date_naive();
    let html = presentations::page_html(
        &config,
        &domestic,
        &international,
        figure.as_deref(),
        today,
    );
    output::write_file(&cli.output_html, &html)?;
    info!("Generated HTML file: {}", cli.output_html.display());

    if let Some(fig_path) = &cli.fig {
        let svg = chart::render_svg(&domestic, &international);
        output::write_file(fig_path, &svg)?;
        info!("Saved figure: {}", fig_path.display());
    }

    Ok(())
}
