use crate::config::types::{Config, HttpConfig, SelectorConfig};
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_selector_config(&config.selectors)?;
    Ok(())
}

/// Validates HTTP session and retry configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.max_retries < 1 || config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be between 1 and 10, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

/// Validates the structural markers
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    let selectors = [
        ("post", &config.post),
        ("title", &config.title),
        ("author", &config.author),
        ("date", &config.date),
        ("ingredients", &config.ingredients),
        ("instructions", &config.instructions),
    ];

    for (field, selector) in selectors {
        parse_selector(field, selector)?;
    }

    validate_class_name(&config.next_page_class)?;
    parse_selector(
        "next-page-class",
        &format!("a.{}", config.next_page_class),
    )?;

    Ok(())
}

/// Compiles a CSS selector, mapping failures to a config error naming the field
pub(crate) fn parse_selector(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector {
            field,
            message: "selector cannot be empty".to_string(),
        });
    }

    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        field,
        message: e.to_string(),
    })
}

/// Validates a bare class name (no leading dot, no whitespace)
fn validate_class_name(class: &str) -> Result<(), ConfigError> {
    if class.is_empty() {
        return Err(ConfigError::Validation(
            "next_page_class cannot be empty".to_string(),
        ));
    }

    if class.starts_with('.') || class.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "next_page_class must be a bare class name, got '{}'",
            class
        )));
    }

    Ok(())
}
