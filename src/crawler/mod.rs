//! Crawler module for listing page retrieval and processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with bounded retries
//! - Recipe extraction from individual posts
//! - Next-page discovery
//! - The pagination loop tying them together

mod coordinator;
pub mod delay;
mod extractor;
mod fetcher;
mod pagination;

pub use coordinator::{Coordinator, ScrapeReport};
pub use delay::{Sleeper, TokioSleeper};
pub use extractor::{Extraction, RecordExtractor};
pub use fetcher::{build_http_client, FetchResult, Fetcher};
pub use pagination::NextPageLocator;

use crate::config::Config;
use crate::model::Recipe;
use crate::ScrapeError;

/// Scrapes every recipe reachable from `start_url` with the default settings
///
/// A page that cannot be fetched ends the run early; recipes gathered up to
/// that point are still returned.
///
/// # Returns
///
/// * `Ok(Vec<Recipe>)` - Recipes in page-then-document order
/// * `Err(ScrapeError)` - The HTTP client could not be built
pub async fn scrape(start_url: &str) -> Result<Vec<Recipe>, ScrapeError> {
    let report = scrape_with_config(&Config::default(), start_url).await?;
    Ok(report.recipes)
}

/// Runs a complete scrape with the given configuration
///
/// A fresh HTTP session is built for every call.
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `start_url` - Absolute URL of the first listing page
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - Recipes and run statistics
/// * `Err(ScrapeError)` - Invalid configuration or HTTP client failure
pub async fn scrape_with_config(
    config: &Config,
    start_url: &str,
) -> Result<ScrapeReport, ScrapeError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(start_url).await)
}
