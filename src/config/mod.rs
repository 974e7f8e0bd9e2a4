//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so `Config::default()` is a
//! complete, valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use homebrew_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Attempts per page: {}", config.http.max_retries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, PaginationConfig, SelectorConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
pub(crate) use validation::parse_selector;
