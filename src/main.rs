//! Homebrew Scraper main entry point
//!
//! This is the command-line interface: it scrapes a recipe listing and saves
//! the recipes as JSON.

use anyhow::Context;
use clap::Parser;
use homebrew_scraper::config::{load_config, Config};
use homebrew_scraper::crawler::scrape_with_config;
use homebrew_scraper::output::{log_statistics, write_recipes_json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrape homebrew recipes from a forum and save them to JSON.
///
/// Follows "next page" links from the starting listing until the listing
/// ends or a page cannot be fetched.
#[derive(Parser, Debug)]
#[command(name = "homebrew-scraper")]
#[command(version)]
#[command(about = "Scrape homebrew recipes from a forum and save to JSON", long_about = None)]
struct Cli {
    /// Starting URL of the recipe listing page (e.g. https://www.example.com/recipes)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to output JSON file
    #[arg(short, long, default_value = "homebrew_recipes.json")]
    output: PathBuf,

    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    tracing::info!("Starting scraper...");
    let report = scrape_with_config(&config, &cli.url)
        .await
        .context("failed to start scraping")?;

    log_statistics(&report.statistics);
    tracing::info!("Scraped a total of {} recipes.", report.recipes.len());

    // A write failure is reported but does not fail the run
    match write_recipes_json(&report.recipes, &cli.output) {
        Ok(()) => tracing::info!("Saved recipes to: {}", cli.output.display()),
        Err(e) => tracing::error!("Failed to write JSON file: {}", e),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("homebrew_scraper=info,warn"),
            1 => EnvFilter::new("homebrew_scraper=debug,info"),
            2 => EnvFilter::new("homebrew_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
