//! Timed pauses used by the fetcher and the pagination loop
//!
//! The scraper only ever suspends for a fixed duration: between two failed
//! attempts of the same page, and before moving on to the next page. Both go
//! through [`Sleeper`] so the pauses can be observed without waiting.

use std::future::Future;
use std::time::Duration;

/// Source of timed pauses
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for `duration`
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
