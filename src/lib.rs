//! Homebrew Scraper: a paginated recipe listing scraper
//!
//! This crate walks a paginated listing of recipe posts, extracts a fixed set
//! of fields from each post and follows "next page" links until the listing
//! runs out or a page can no longer be fetched.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for scraper operations
///
/// Per-page and per-post failures never surface here: they end the run or
/// skip the post. Only failures that prevent a run from starting do.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector for {field}: {message}")]
    InvalidSelector { field: &'static str, message: String },
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{scrape, scrape_with_config, ScrapeReport};
pub use model::Recipe;
pub use state::{RunState, StopReason};
