//! Statistics gathered during a scrape run

use crate::state::StopReason;

/// Counters for one scrape run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeStatistics {
    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Post nodes found across all fetched pages
    pub posts_found: u64,

    /// Posts turned into recipes
    pub recipes_extracted: u64,

    /// Posts skipped as incomplete (including failed extractions)
    pub posts_skipped: u64,

    /// Why the run ended
    pub stop_reason: Option<StopReason>,
}

impl ScrapeStatistics {
    /// Records the outcome of one processed page
    pub fn record_page(&mut self, posts_found: usize, recipes_extracted: usize) {
        self.pages_fetched += 1;
        self.posts_found += posts_found as u64;
        self.recipes_extracted += recipes_extracted as u64;
        self.posts_skipped += posts_found.saturating_sub(recipes_extracted) as u64;
    }

    /// Calculates the share of posts that were skipped (0-100%)
    pub fn skip_rate(&self) -> f64 {
        if self.posts_found == 0 {
            0.0
        } else {
            (self.posts_skipped as f64 / self.posts_found as f64) * 100.0
        }
    }

    /// Returns true if the whole listing was walked
    pub fn is_complete(&self) -> bool {
        self.stop_reason
            .as_ref()
            .map(StopReason::is_complete)
            .unwrap_or(false)
    }
}

/// Logs a summary of the run
pub fn log_statistics(stats: &ScrapeStatistics) {
    tracing::info!(
        "Pages fetched: {}, posts found: {}, recipes: {}, skipped: {} ({:.2}%)",
        stats.pages_fetched,
        stats.posts_found,
        stats.recipes_extracted,
        stats.posts_skipped,
        stats.skip_rate()
    );

    match &stats.stop_reason {
        Some(reason) if reason.is_complete() => tracing::info!("Stopped: {}", reason),
        Some(reason) => tracing::warn!("Stopped early: {} (partial results kept)", reason),
        None => {}
    }
}
