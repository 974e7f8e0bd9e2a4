//! Pagination driver - main scrape orchestration logic
//!
//! This module contains the page loop that ties the other components
//! together:
//! - Fetching the current page
//! - Extracting a recipe from every post on it
//! - Locating the next page and pausing before fetching it
//!
//! The loop is a two-state machine (see [`RunState`]). A page that cannot be
//! fetched ends the run, but recipes collected from earlier pages are kept.

use crate::config::{parse_selector, validate, Config};
use crate::crawler::delay::{Sleeper, TokioSleeper};
use crate::crawler::extractor::{Extraction, RecordExtractor};
use crate::crawler::fetcher::{build_http_client, FetchResult, Fetcher};
use crate::crawler::pagination::NextPageLocator;
use crate::model::Recipe;
use crate::output::ScrapeStatistics;
use crate::state::RunState;
use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

/// Recipes and statistics produced by one run
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    /// Recipes in page-then-document order
    pub recipes: Vec<Recipe>,

    /// Counters and stop reason for the run
    pub statistics: ScrapeStatistics,
}

/// What one listing page yielded
#[derive(Debug)]
struct PageOutcome {
    posts_found: usize,
    recipes: Vec<Recipe>,
    next_url: Option<String>,
}

/// Main scrape coordinator structure
pub struct Coordinator<S = TokioSleeper> {
    fetcher: Fetcher<S>,
    extractor: RecordExtractor,
    locator: NextPageLocator,
    post_selector: Selector,
    page_delay: Duration,
    sleeper: S,
}

impl Coordinator<TokioSleeper> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrapeError)` - Invalid configuration or HTTP client failure
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        Self::with_sleeper(config, TokioSleeper)
    }
}

impl<S: Sleeper + Clone> Coordinator<S> {
    /// Creates a coordinator whose retry and courtesy pauses go through `sleeper`
    pub fn with_sleeper(config: &Config, sleeper: S) -> Result<Self, ScrapeError> {
        validate(config)?;

        let client = build_http_client(&config.http)?;
        let fetcher = Fetcher::with_sleeper(client, &config.http, sleeper.clone());

        Ok(Self {
            fetcher,
            extractor: RecordExtractor::new(&config.selectors)?,
            locator: NextPageLocator::new(&config.selectors.next_page_class)?,
            post_selector: parse_selector("post", &config.selectors.post)?,
            page_delay: config.pagination.page_delay(),
            sleeper,
        })
    }

    /// Runs the page loop starting at `start_url`
    ///
    /// Never fails: fetch failures end the run and are reflected in the
    /// statistics' stop reason.
    pub async fn run(&self, start_url: &str) -> ScrapeReport {
        let mut report = ScrapeReport::default();
        let mut state = RunState::start(start_url);

        loop {
            let current = match state {
                RunState::Running { current } => current,
                RunState::Done { reason } => {
                    tracing::debug!("Run finished: {}", reason);
                    report.statistics.stop_reason = Some(reason);
                    break;
                }
            };

            tracing::info!("Scraping page: {}", current);

            let body = match self.fetcher.fetch(&current).await {
                FetchResult::Success {
                    final_url,
                    status_code,
                    body,
                } => {
                    tracing::debug!("Fetched {} (HTTP {})", final_url, status_code);
                    body
                }
                FetchResult::Exhausted { attempts, error } => {
                    tracing::error!(
                        "Giving up on {} after {} attempts ({}); keeping {} recipes",
                        current,
                        attempts,
                        error,
                        report.recipes.len()
                    );
                    state = RunState::fetch_failed(current);
                    continue;
                }
            };

            let page = self.process_page(&body, &current);
            report
                .statistics
                .record_page(page.posts_found, page.recipes.len());
            report.recipes.extend(page.recipes);

            state = RunState::advance(&current, page.next_url);
            if let RunState::Running { current: next } = &state {
                tracing::debug!(
                    "Waiting {} seconds before fetching {}",
                    self.page_delay.as_secs(),
                    next
                );
                self.sleeper.sleep(self.page_delay).await;
            }
        }

        report
    }

    /// Parses a fetched page, extracting posts and the next-page link
    ///
    /// The parsed document is dropped before returning so it never lives
    /// across an await point.
    fn process_page(&self, body: &str, current_url: &str) -> PageOutcome {
        self.process_page_with(body, current_url, |post| self.extractor.extract(post))
    }

    /// Like [`Self::process_page`], with `extract` run on every post
    fn process_page_with<F>(&self, body: &str, current_url: &str, extract: F) -> PageOutcome
    where
        F: Fn(ElementRef<'_>) -> Extraction,
    {
        let document = Html::parse_document(body);

        let posts: Vec<ElementRef<'_>> = document.select(&self.post_selector).collect();
        tracing::info!("Found {} posts on this page.", posts.len());

        let recipes = posts
            .iter()
            .filter_map(|post| extract_post(|| extract(*post)))
            .collect();

        PageOutcome {
            posts_found: posts.len(),
            recipes,
            next_url: self.locator.find_next(&document, current_url),
        }
    }
}

/// Runs one post's extraction, containing any panic to that post
fn extract_post(extract: impl FnOnce() -> Extraction) -> Option<Recipe> {
    match panic::catch_unwind(AssertUnwindSafe(extract)) {
        Ok(Extraction::Complete(recipe)) => Some(recipe),
        Ok(Extraction::Incomplete { missing }) => {
            tracing::debug!(
                "Missing mandatory fields ({}); skipping this post.",
                missing.join(", ")
            );
            None
        }
        Err(payload) => {
            tracing::error!("Error parsing a recipe post: {}", panic_message(&*payload));
            None
        }
    }
}

/// Best-effort text of a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown error"
    }
}
