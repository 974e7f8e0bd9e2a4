use serde::Deserialize;
use std::time::Duration;

/// Browser-like user agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/90.0.4430.93 Safari/537.36";

/// Main configuration structure for the scraper
///
/// Every section and key is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// HTTP session and retry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header shared by every request of a run
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-attempt timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Total number of attempts per page, including the first one
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Pause between two failed attempts (seconds)
    #[serde(rename = "retry-delay-secs", default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

/// Pagination behavior
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Courtesy pause before fetching the next page (seconds)
    #[serde(rename = "page-delay-secs", default = "default_page_delay")]
    pub page_delay_secs: u64,
}

impl PaginationConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_secs(self.page_delay_secs)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_delay_secs: default_page_delay(),
        }
    }
}

/// Structural markers used to locate posts and their fields
///
/// All values except `next_page_class` are CSS selectors.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_post")]
    pub post: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_ingredients")]
    pub ingredients: String,
    #[serde(default = "default_instructions")]
    pub instructions: String,

    /// Bare class name carried by "next page" links
    #[serde(rename = "next-page-class", default = "default_next_page_class")]
    pub next_page_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            post: default_post(),
            title: default_title(),
            author: default_author(),
            date: default_date(),
            ingredients: default_ingredients(),
            instructions: default_instructions(),
            next_page_class: default_next_page_class(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    3
}

fn default_page_delay() -> u64 {
    1
}

fn default_post() -> String {
    "div.recipe-post".to_string()
}

fn default_title() -> String {
    "div.recipe-title".to_string()
}

fn default_author() -> String {
    "div.recipe-author".to_string()
}

fn default_date() -> String {
    "div.recipe-date".to_string()
}

fn default_ingredients() -> String {
    "div.recipe-ingredients".to_string()
}

fn default_instructions() -> String {
    "div.recipe-instructions".to_string()
}

fn default_next_page_class() -> String {
    "next-page".to_string()
}
