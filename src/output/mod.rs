//! Output module for scrape results
//!
//! This module handles:
//! - Writing scraped recipes as JSON
//! - Recording and logging run statistics

mod json;
pub mod stats;

pub use json::{format_recipes_json, write_recipes_json};
pub use stats::{log_statistics, ScrapeStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
