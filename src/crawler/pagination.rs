//! Next-page discovery
//!
//! Listing pages are chained by a "next" link. The locator tries, in order:
//!
//! 1. `<a rel="next">`
//! 2. `<a class="next-page">` (class name configurable)
//! 3. any `<a>` whose trimmed text is "next" or "more" (case-insensitive)
//!
//! Heuristics 1 and 2 only look at the first matching link on the page. If
//! that link has no followable href, the next heuristic is tried. A
//! fragment-only href (a disabled "next" button is often `href="#"`) points
//! back at the current page, which ends the run at the driver's self-link
//! check.

use crate::config::parse_selector;
use crate::url::{resolve_link, LinkTarget};
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Link texts accepted by the text heuristic
const NEXT_LINK_TEXTS: &[&str] = &["next", "more"];

/// Finds the absolute URL of the page following a listing page
#[derive(Debug, Clone)]
pub struct NextPageLocator {
    rel_next: Selector,
    class_next: Selector,
    any_link: Selector,
}

impl NextPageLocator {
    /// Builds a locator recognizing `next_page_class` as the next-page marker
    pub fn new(next_page_class: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            rel_next: parse_selector("next-page-rel", r#"a[rel~="next"]"#)?,
            class_next: parse_selector("next-page-class", &format!("a.{}", next_page_class))?,
            any_link: parse_selector("next-page-text", "a")?,
        })
    }

    /// Returns the absolute URL of the next page, if any
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed listing page
    /// * `current_url` - The URL the page was fetched from, used as the base
    ///   for relative hrefs
    ///
    /// # Returns
    ///
    /// * `Some(String)` - Absolute URL of the next page
    /// * `None` - No heuristic matched; pagination ends here
    pub fn find_next(&self, document: &Html, current_url: &str) -> Option<String> {
        let base_url = match Url::parse(current_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Cannot resolve links against {}: {}", current_url, e);
                return None;
            }
        };

        let rel_link = document.select(&self.rel_next).next();
        if let Some(next) = rel_link.and_then(|link| follow(link, &base_url, current_url)) {
            tracing::debug!("Next page found via rel=\"next\": {}", next);
            return Some(next);
        }

        let class_link = document.select(&self.class_next).next();
        if let Some(next) = class_link.and_then(|link| follow(link, &base_url, current_url)) {
            tracing::debug!("Next page found via next-page class: {}", next);
            return Some(next);
        }

        let by_text = document
            .select(&self.any_link)
            .filter(|link| {
                let text = link.text().collect::<String>();
                let text = text.trim().to_lowercase();
                NEXT_LINK_TEXTS.contains(&text.as_str())
            })
            .find_map(|link| follow(link, &base_url, current_url));
        if let Some(next) = by_text {
            tracing::debug!("Next page found via link text: {}", next);
            return Some(next);
        }

        None
    }
}

/// Absolute target of a link's href; same-page anchors yield `current_url`
fn follow(link: ElementRef<'_>, base_url: &Url, current_url: &str) -> Option<String> {
    let href = link.value().attr("href")?;
    match resolve_link(href, base_url)? {
        LinkTarget::Absolute(target) => Some(target),
        LinkTarget::SamePage => Some(current_url.to_string()),
    }
}
