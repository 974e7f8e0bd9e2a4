//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the per-run HTTP client (user agent, timeout)
//! - GET requests to fetch listing pages
//! - A bounded number of attempts with a fixed pause between them
//!
//! Every failure is treated the same way: transport errors, timeouts and
//! non-2xx statuses all count as one failed attempt.

use crate::config::HttpConfig;
use crate::crawler::delay::{Sleeper, TokioSleeper};
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Every attempt failed
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// Description of the last failure
        error: String,
    },
}

impl FetchResult {
    /// Returns true if the page was fetched
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Consumes the result, returning the body on success
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Builds the HTTP client shared by every request of a run
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client (e.g. invalid user agent)
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages with a bounded number of attempts
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 2xx | Return body, no further attempts |
/// | Any other status | Retry after `retry_delay` |
/// | Timeout / transport error | Retry after `retry_delay` |
/// | Last attempt failed | Return `Exhausted` |
#[derive(Debug, Clone)]
pub struct Fetcher<S = TokioSleeper> {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
    sleeper: S,
}

impl Fetcher<TokioSleeper> {
    /// Creates a fetcher that pauses with the tokio timer
    pub fn new(client: Client, config: &HttpConfig) -> Self {
        Self::with_sleeper(client, config, TokioSleeper)
    }
}

impl<S: Sleeper> Fetcher<S> {
    /// Creates a fetcher with a custom pause source
    pub fn with_sleeper(client: Client, config: &HttpConfig, sleeper: S) -> Self {
        Self {
            client,
            max_retries: config.max_retries.max(1),
            retry_delay: config.retry_delay(),
            sleeper,
        }
    }

    /// Fetches a URL, retrying failed attempts
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to fetch
    ///
    /// # Returns
    ///
    /// `FetchResult::Success` on the first successful attempt, or
    /// `FetchResult::Exhausted` once every attempt has failed
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let mut last_error = String::new();

        for attempt in 1..=self.max_retries {
            tracing::debug!("Fetching URL (attempt {}): {}", attempt, url);

            match self.attempt(url).await {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!("Attempt {} failed: {}", attempt, e);
                    last_error = e.to_string();

                    if attempt < self.max_retries {
                        tracing::info!("Retrying in {} seconds...", self.retry_delay.as_secs());
                        self.sleeper.sleep(self.retry_delay).await;
                    }
                }
            }
        }

        tracing::error!(
            "Failed to fetch {} after {} attempts.",
            url,
            self.max_retries
        );

        FetchResult::Exhausted {
            attempts: self.max_retries,
            error: last_error,
        }
    }

    /// Performs a single GET request
    async fn attempt(&self, url: &str) -> Result<FetchResult, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let final_url = response.url().to_string();
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(FetchResult::Success {
            final_url,
            status_code,
            body,
        })
    }
}
